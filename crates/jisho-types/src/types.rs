use serde::{Deserialize, Serialize};

/// Requests the launcher can make of us, one per process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherEvent {
    /// Raw text typed into the launcher's input box
    Search(String),
    /// Select action on a result row
    Open(String),
    /// Modifier action on a result row
    LargeText(String),
}

/// A single row shown by the launcher, derived from one dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Preferred writing, or the reading when the entry has no writing
    pub title: String,
    /// English glosses
    pub subtitle: String,
    /// Reading paired with writing for the enlarged view
    pub detail: String,
    /// Canonical entry page
    pub url: String,
}

impl DisplayItem {
    pub fn action(&self, modifier: Option<Modifier>) -> LauncherAction {
        match modifier {
            None => LauncherAction::Open(self.url.clone()),
            Some(Modifier::Cmd) => LauncherAction::LargeText(self.detail.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Cmd,
}

/// What the host should do when the user acts on a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherAction {
    Open(String),
    LargeText(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> DisplayItem {
        DisplayItem {
            title: "日付".to_string(),
            subtitle: "date".to_string(),
            detail: "ひづけ (日付)".to_string(),
            url: "https://jisho.org/word/日付".to_string(),
        }
    }

    #[test]
    fn select_opens_url() {
        assert_eq!(
            item().action(None),
            LauncherAction::Open("https://jisho.org/word/日付".to_string())
        );
    }

    #[test]
    fn cmd_shows_detail() {
        assert_eq!(
            item().action(Some(Modifier::Cmd)),
            LauncherAction::LargeText("ひづけ (日付)".to_string())
        );
    }

    #[test]
    fn serializes_flat() {
        let value = serde_json::to_value(item()).unwrap();
        assert_eq!(value["title"], "日付");
        assert_eq!(value["url"], "https://jisho.org/word/日付");
    }
}
