use jisho_types::DisplayItem;

use crate::record::{ResultRecord, Sense};

pub const DEFAULT_WORD_URL_BASE: &str = "https://jisho.org/word/";
pub const DEFAULT_GLOSS_SEPARATOR: &str = "; ";

/// Separator between definitions inside one sense
const DEFINITION_SEPARATOR: &str = ", ";

#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Senses joined into the subtitle, all when `None`
    pub max_senses: Option<usize>,
    /// Items returned, all when `None`
    pub max_results: Option<usize>,
    pub gloss_separator: String,
    pub word_url_base: String,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            max_senses: None,
            max_results: None,
            gloss_separator: DEFAULT_GLOSS_SEPARATOR.to_string(),
            word_url_base: DEFAULT_WORD_URL_BASE.to_string(),
        }
    }
}

/// Project records with default options
pub fn project(records: &[ResultRecord]) -> Vec<DisplayItem> {
    project_with(records, &ProjectOptions::default())
}

/// Map API records to launcher rows, keeping their order.
///
/// Records with neither a writing nor a reading are dropped.
pub fn project_with(records: &[ResultRecord], options: &ProjectOptions) -> Vec<DisplayItem> {
    let limit = options.max_results.unwrap_or(usize::MAX);

    let items: Vec<DisplayItem> = records
        .iter()
        .filter_map(|record| {
            let item = project_record(record, options);
            if item.is_none() {
                tracing::debug!("Skipping record without writing or reading: {:?}", record.slug);
            }
            item
        })
        .take(limit)
        .collect();

    tracing::debug!("Projected {} of {} records", items.len(), records.len());
    items
}

fn project_record(record: &ResultRecord, options: &ProjectOptions) -> Option<DisplayItem> {
    let (writing, reading) = record.headword();

    let title = writing.or(reading)?.to_string();

    let detail = match (reading, writing) {
        (Some(reading), Some(writing)) => format!("{reading} ({writing})"),
        _ => title.clone(),
    };

    let subtitle = join_senses(&record.senses, options);

    let slug = record
        .slug
        .as_deref()
        .filter(|slug| !slug.is_empty())
        .unwrap_or(title.as_str());
    let url = format!("{}{}", options.word_url_base, escape_slug(slug));

    Some(DisplayItem {
        title,
        subtitle,
        detail,
        url,
    })
}

/// Escape the characters that would end or split the path segment.
/// Kana and kanji stay readable; browsers encode them on navigation.
fn escape_slug(slug: &str) -> String {
    let mut escaped = String::with_capacity(slug.len());
    for c in slug.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            '#' => escaped.push_str("%23"),
            '?' => escaped.push_str("%3F"),
            '/' => escaped.push_str("%2F"),
            ' ' => escaped.push_str("%20"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn join_senses(senses: &[Sense], options: &ProjectOptions) -> String {
    let limit = options.max_senses.unwrap_or(usize::MAX);

    senses
        .iter()
        .filter(|sense| !sense.english_definitions.is_empty())
        .take(limit)
        .map(|sense| sense.english_definitions.join(DEFINITION_SEPARATOR))
        .collect::<Vec<_>>()
        .join(&options.gloss_separator)
}
