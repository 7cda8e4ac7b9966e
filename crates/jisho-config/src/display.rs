use serde::{Deserialize, Serialize};

/// Alfred shows at most nine rows without scrolling
fn default_max_results() -> usize {
    9
}

fn default_gloss_separator() -> String {
    "; ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Senses included in the subtitle, all when unset
    pub max_senses: Option<usize>,
    #[serde(default = "default_gloss_separator")]
    pub gloss_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            max_senses: None,
            gloss_separator: default_gloss_separator(),
        }
    }
}
