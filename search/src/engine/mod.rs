use crate::exact::ExactMatch;
use crate::fuzzy::FuzzyMatch;
use crate::matcher::Matcher;
use crate::query::SearchQuery;
use crate::word::WordMatch;
use sift_core::{SearchConfig, SearchMode, Titled};
use tracing::{debug, trace};

/// All three matchers built over one item slice.
///
/// Each query goes to the matcher of the current [`SearchMode`], or to the
/// one a [`SearchQuery`] names. Building is the only expensive step; queries
/// borrow the engine immutably.
pub struct SearchEngine<'a, T> {
    exact: ExactMatch<'a, T>,
    word: WordMatch<'a, T>,
    fuzzy: FuzzyMatch<'a, T>,
    mode: SearchMode,
    result_limit: Option<usize>,
}

impl<'a, T: Titled> SearchEngine<'a, T> {
    pub fn new(items: &'a [T], config: &SearchConfig) -> Self {
        let engine = Self {
            exact: ExactMatch::new(items),
            word: WordMatch::new(items),
            fuzzy: FuzzyMatch::new(items, &config.fuzzy),
            mode: config.search.mode,
            result_limit: config.search.result_limit,
        };
        debug!(items = items.len(), mode = %engine.mode, "search engine ready");
        engine
    }
}

/// Mode operations.
impl<'a, T: Titled> SearchEngine<'a, T> {
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// `None` returns every match.
    pub fn set_result_limit(&mut self, limit: Option<usize>) {
        self.result_limit = limit;
    }
}

/// Search operations.
impl<'a, T: Titled> SearchEngine<'a, T> {
    /// Answers `request` with the current mode.
    pub fn query(&self, request: &str) -> Vec<&'a T> {
        self.query_with(self.mode, request)
    }

    /// Answers with the strategy the query names, regardless of the current mode.
    pub fn search(&self, query: &SearchQuery) -> Vec<&'a T> {
        self.query_with(query.mode(), query.request())
    }

    fn query_with(&self, mode: SearchMode, request: &str) -> Vec<&'a T> {
        let mut results = self.matcher(mode).query(request);
        if let Some(limit) = self.result_limit {
            results.truncate(limit);
        }
        trace!(%mode, request, hits = results.len(), "engine query");
        results
    }

    /// The matcher behind `mode`. Its results are not truncated to the result limit.
    pub fn matcher(&self, mode: SearchMode) -> &dyn Matcher<'a, T> {
        match mode {
            SearchMode::Exact => &self.exact,
            SearchMode::Word => &self.word,
            SearchMode::Fuzzy => &self.fuzzy,
        }
    }
}
