//! Launcher feedback in the Alfred script filter JSON format.
//!
//! Selecting a row passes `arg` (the entry URL) to the host's open action.
//! Cmd passes the detail text instead, and the host's large type view reads
//! `text.largetype`.

use std::io::Write;

use jisho_types::{DisplayItem, LauncherAction, Modifier};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct Feedback {
    pub items: Vec<FeedbackItem>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackItem {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    pub valid: bool,
    pub quicklookurl: String,
    pub text: ItemText,
    pub mods: ItemMods,
}

#[derive(Debug, Serialize)]
pub struct ItemText {
    pub copy: String,
    pub largetype: String,
}

#[derive(Debug, Serialize)]
pub struct ItemMods {
    pub cmd: ModAction,
}

#[derive(Debug, Serialize)]
pub struct ModAction {
    pub arg: String,
    pub subtitle: String,
    pub valid: bool,
}

fn action_arg(action: LauncherAction) -> String {
    match action {
        LauncherAction::Open(url) => url,
        LauncherAction::LargeText(text) => text,
    }
}

impl From<DisplayItem> for FeedbackItem {
    fn from(item: DisplayItem) -> Self {
        let arg = action_arg(item.action(None));
        let cmd_arg = action_arg(item.action(Some(Modifier::Cmd)));

        Self {
            uid: item.url.clone(),
            quicklookurl: item.url,
            title: item.title.clone(),
            subtitle: item.subtitle,
            arg,
            valid: true,
            text: ItemText {
                copy: item.title,
                largetype: item.detail,
            },
            mods: ItemMods {
                cmd: ModAction {
                    subtitle: format!("Show {cmd_arg} in large type"),
                    arg: cmd_arg,
                    valid: true,
                },
            },
        }
    }
}

impl Feedback {
    pub fn from_items(items: Vec<DisplayItem>) -> Self {
        Self {
            items: items.into_iter().map(FeedbackItem::from).collect(),
        }
    }

    pub fn write_to(&self, out: &mut impl Write, pretty: bool) -> anyhow::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *out, self)?;
        } else {
            serde_json::to_writer(&mut *out, self)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
