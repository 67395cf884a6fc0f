//! Search query types.

use sift_core::SearchMode;

/// A request tagged with the strategy that should answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Title prefix search.
    Exact(String),
    /// Word prefix search; every space-separated word must match.
    Words(String),
    /// Fuzzy subsequence search.
    Fuzzy(String),
}

impl SearchQuery {
    pub fn new(mode: SearchMode, request: impl Into<String>) -> Self {
        let request = request.into();
        match mode {
            SearchMode::Exact => SearchQuery::Exact(request),
            SearchMode::Word => SearchQuery::Words(request),
            SearchMode::Fuzzy => SearchQuery::Fuzzy(request),
        }
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            SearchQuery::Exact(_) => SearchMode::Exact,
            SearchQuery::Words(_) => SearchMode::Word,
            SearchQuery::Fuzzy(_) => SearchMode::Fuzzy,
        }
    }

    pub fn request(&self) -> &str {
        match self {
            SearchQuery::Exact(request)
            | SearchQuery::Words(request)
            | SearchQuery::Fuzzy(request) => request,
        }
    }
}
