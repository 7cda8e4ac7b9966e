use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

fn default_word_url_base() -> String {
    "https://jisho.org/word/".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("jisho-launcher/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Word search endpoint, queried with `?keyword=`
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Prefix joined with a record's slug to build the entry page link
    #[serde(default = "default_word_url_base")]
    pub word_url_base: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            word_url_base: default_word_url_base(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
