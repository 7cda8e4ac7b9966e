use jisho_client::DictionarySource;
use jisho_config::Config;
use jisho_core::ProjectOptions;

pub struct AppState {
    pub config: Config,
    pub source: Box<dyn DictionarySource>,
}

impl AppState {
    pub fn new(config: Config, source: Box<dyn DictionarySource>) -> Self {
        Self { config, source }
    }

    pub fn project_options(&self) -> ProjectOptions {
        ProjectOptions {
            max_senses: self.config.display.max_senses,
            max_results: Some(self.config.display.max_results),
            gloss_separator: self.config.display.gloss_separator.clone(),
            word_url_base: self.config.api.word_url_base.clone(),
        }
    }
}
