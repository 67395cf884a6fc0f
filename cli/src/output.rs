//! Output formatting for search results.

use serde::Serialize;
use sift_core::{Item, ItemId, SearchMode, Titled};

#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub query: &'a str,
    pub mode: SearchMode,
    pub results: Vec<JsonItem<'a>>,
}

#[derive(Serialize)]
pub struct JsonItem<'a> {
    pub id: ItemId,
    pub title: &'a str,
}

pub fn format_json(query: &str, mode: SearchMode, results: &[&Item]) -> serde_json::Result<String> {
    let output = JsonOutput {
        query,
        mode,
        results: results
            .iter()
            .map(|item| JsonItem {
                id: item.id,
                title: item.title(),
            })
            .collect(),
    };
    serde_json::to_string(&output)
}

/// One title per line; an empty result prints a marker line.
pub fn format_human(results: &[&Item]) -> String {
    if results.is_empty() {
        return "(no matches)".to_string();
    }
    results
        .iter()
        .map(|item| item.title())
        .collect::<Vec<_>>()
        .join("\n")
}
