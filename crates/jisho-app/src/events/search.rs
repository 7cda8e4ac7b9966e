use jisho_core::{is_quoted_literal, is_searchable, normalize, project_with};
use jisho_types::DisplayItem;

use crate::state::AppState;

/// Run one search. Every failure ends as an empty list for the host to render.
pub async fn handle_search(state: &AppState, query: &str) -> Vec<DisplayItem> {
    if !is_searchable(query) {
        tracing::debug!("Query {:?} not searchable, skipping request", query);
        return Vec::new();
    }

    let query = normalize(query);
    if is_quoted_literal(&query) {
        tracing::debug!("Quoted literal, API will skip romaji conversion");
    }

    let records = match state.source.search(&query).await {
        Ok(records) => records,
        Err(e) => {
            let source = state.source.metadata();
            tracing::error!(
                "Search for {:?} via {} ({}) failed: {}",
                query,
                source.name,
                source.endpoint,
                e
            );
            return Vec::new();
        }
    };

    let items = project_with(&records, &state.project_options());
    tracing::info!("{} results for {:?}", items.len(), query);
    items
}
