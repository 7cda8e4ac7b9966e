use std::time::Duration;

use async_trait::async_trait;
use jisho_config::api::ApiConfig;
use jisho_core::{ResultRecord, SearchResponse};

use crate::{DictionarySource, SearchError, SourceMetadata};

#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
}

impl JishoClient {
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Use a preconfigured client, e.g. one with custom proxy settings
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl DictionarySource for JishoClient {
    async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError> {
        tracing::debug!("GET {} keyword={:?}", self.api_url, query);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Http(status));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        match parsed.meta {
            Some(meta) if meta.status != 200 => return Err(SearchError::Api(meta.status)),
            _ => {}
        }

        tracing::debug!("Received {} records", parsed.data.len());
        Ok(parsed.data)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Jisho".to_string(),
            endpoint: self.api_url.clone(),
        }
    }
}
