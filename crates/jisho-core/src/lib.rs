pub mod projector;
pub mod query;
pub mod record;

pub use projector::{ProjectOptions, project, project_with};
pub use query::{is_quoted_literal, is_searchable, normalize};
pub use record::{JapaneseForm, ResultRecord, SearchMeta, SearchResponse, Sense};
