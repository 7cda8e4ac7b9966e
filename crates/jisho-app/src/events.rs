use std::io::Write;

use jisho_types::LauncherEvent;

use crate::feedback::Feedback;
use crate::state::AppState;

pub mod large_text;
pub mod open;
pub mod search;

use large_text::handle_large_text;
use open::handle_open;
use search::handle_search;

pub async fn handle_event(
    state: &AppState,
    event: LauncherEvent,
    out: &mut impl Write,
    pretty: bool,
) -> anyhow::Result<()> {
    tracing::debug!("Handling {:?}", event);

    match event {
        LauncherEvent::Search(query) => {
            let items = handle_search(state, &query).await;
            Feedback::from_items(items).write_to(out, pretty)?;
        }
        LauncherEvent::Open(url) => {
            handle_open(&url)?;
        }
        LauncherEvent::LargeText(text) => {
            handle_large_text(&text, out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use jisho_client::{DictionarySource, SearchError, SourceMetadata};
    use jisho_config::Config;
    use jisho_core::{JapaneseForm, ResultRecord, Sense};

    use super::*;

    struct OneWord;

    #[async_trait]
    impl DictionarySource for OneWord {
        async fn search(&self, _query: &str) -> Result<Vec<ResultRecord>, SearchError> {
            Ok(vec![ResultRecord {
                slug: Some("日付".to_string()),
                japanese: vec![JapaneseForm {
                    word: Some("日付".to_string()),
                    reading: Some("ひづけ".to_string()),
                }],
                senses: vec![Sense {
                    english_definitions: vec!["date".to_string()],
                }],
                ..Default::default()
            }])
        }

        fn metadata(&self) -> SourceMetadata {
            SourceMetadata {
                name: "one-word".to_string(),
                endpoint: String::new(),
            }
        }
    }

    struct Offline;

    #[async_trait]
    impl DictionarySource for Offline {
        async fn search(&self, _query: &str) -> Result<Vec<ResultRecord>, SearchError> {
            Err(SearchError::Api(503))
        }

        fn metadata(&self) -> SourceMetadata {
            SourceMetadata {
                name: "offline".to_string(),
                endpoint: String::new(),
            }
        }
    }

    fn config() -> Config {
        Config::from_lookup(|_| None)
    }

    #[tokio::test]
    async fn search_prints_feedback() {
        let state = AppState::new(config(), Box::new(OneWord));
        let mut out = Vec::new();

        handle_event(&state, LauncherEvent::Search("date".to_string()), &mut out, false)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "日付");
        assert_eq!(items[0]["subtitle"], "date");
        assert_eq!(items[0]["arg"], "https://jisho.org/word/日付");
        assert_eq!(items[0]["text"]["largetype"], "ひづけ (日付)");
    }

    #[tokio::test]
    async fn failed_search_prints_empty_feedback() {
        let state = AppState::new(config(), Box::new(Offline));
        let mut out = Vec::new();

        handle_event(&state, LauncherEvent::Search("date".to_string()), &mut out, false)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "{\"items\":[]}\n");
    }

    #[tokio::test]
    async fn large_text_echoes() {
        let state = AppState::new(config(), Box::new(Offline));
        let mut out = Vec::new();

        handle_event(
            &state,
            LauncherEvent::LargeText("ひづけ (日付)".to_string()),
            &mut out,
            false,
        )
        .await
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "ひづけ (日付)\n");
    }
}
