mod jisho;

pub use jisho::JishoClient;

use jisho_core::ResultRecord;

/// Remote dictionary search interface
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Search for entries matching the query, forwarded as given
    async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Http(reqwest::StatusCode),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error: status {0}")]
    Api(u16),
}
