//! Sift launcher search library.
//!
//! Resolves a typed request against a fixed collection of titled items.
//!
//! # Design
//!
//! - Indexes are built once from a borrowed item slice and never mutated.
//! - Every query takes `&self`, so a built index can serve many threads.
//! - Three strategies share one case-insensitive ordering (`sift_core::collate`):
//!   - [`ExactMatch`]: title prefix, two binary searches over sorted titles
//!   - [`WordMatch`]: word prefixes, inverted index plus set intersection
//!   - [`FuzzyMatch`]: subsequence atoms scored by nucleo
//! - [`SearchEngine`] holds all three and dispatches on [`SearchMode`].

mod engine;
mod exact;
mod fuzzy;
mod matcher;
mod query;
pub mod tokenize;
mod word;

pub use engine::SearchEngine;
pub use exact::ExactMatch;
pub use fuzzy::FuzzyMatch;
pub use matcher::Matcher;
pub use query::SearchQuery;
pub use sift_core::{FuzzyConfig, SearchConfig, SearchMode, Titled};
pub use word::{Posting, WordMatch};
