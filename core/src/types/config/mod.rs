mod search;

pub use search::{FuzzyConfig, SearchConfig, SearchMode, SearchSettings};
