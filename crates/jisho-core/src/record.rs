use serde::Deserialize;

/// Body of `GET /api/v1/search/words`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meta: Option<SearchMeta>,
    #[serde(default)]
    pub data: Vec<ResultRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMeta {
    pub status: u16,
}

/// One dictionary entry as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub japanese: Vec<JapaneseForm>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

/// A kanji/kana writing and its reading; either may be absent
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JapaneseForm {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub english_definitions: Vec<String>,
}

impl ResultRecord {
    /// First non-empty writing across all forms
    pub fn writing(&self) -> Option<&str> {
        self.japanese
            .iter()
            .filter_map(|form| form.word.as_deref())
            .find(|word| !word.is_empty())
    }

    /// First non-empty reading across all forms
    pub fn reading(&self) -> Option<&str> {
        self.japanese
            .iter()
            .filter_map(|form| form.reading.as_deref())
            .find(|reading| !reading.is_empty())
    }

    /// Writing and the reading that belongs to it.
    ///
    /// The reading comes from the form that supplied the writing, falling
    /// back to the first reading when that form has none.
    pub fn headword(&self) -> (Option<&str>, Option<&str>) {
        let form = self
            .japanese
            .iter()
            .find(|form| form.word.as_deref().is_some_and(|word| !word.is_empty()));

        match form {
            Some(form) => {
                let reading = form
                    .reading
                    .as_deref()
                    .filter(|reading| !reading.is_empty())
                    .or_else(|| self.reading());
                (form.word.as_deref(), reading)
            }
            None => (None, self.reading()),
        }
    }
}
