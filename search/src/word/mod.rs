//! Word-prefix matching over an inverted index.

use crate::matcher::Matcher;
use crate::tokenize;
use sift_core::Titled;
use sift_core::collate;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// A token and the positions of every item whose title contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    /// Spelling of the first occurrence; lookups ignore case.
    token: String,
    items: BTreeSet<usize>,
}

impl Posting {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            items: BTreeSet::new(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Positions into the slice the index was built from.
    pub fn items(&self) -> &BTreeSet<usize> {
        &self.items
    }
}

/// Inverted index from title words to items.
///
/// Postings are strictly ascending by case-insensitive token, so the run of
/// tokens sharing a prefix is found with two binary searches.
pub struct WordMatch<'a, T> {
    items: &'a [T],
    postings: Vec<Posting>,
}

impl<'a, T: Titled> WordMatch<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        let mut index: BTreeMap<String, Posting> = BTreeMap::new();
        for (position, item) in items.iter().enumerate() {
            for token in tokenize::title_tokens(item.title()) {
                index
                    .entry(collate::fold_key(token))
                    .or_insert_with(|| Posting::new(token))
                    .items
                    .insert(position);
            }
        }

        let postings: Vec<Posting> = index.into_values().collect();
        debug_assert!(postings.windows(2).all(|pair| {
            collate::compare(pair[0].token(), pair[1].token()) == std::cmp::Ordering::Less
        }));
        debug!(
            items = items.len(),
            postings = postings.len(),
            "built word index"
        );

        Self { items, postings }
    }

    /// Items having, for every space-separated word of `request`, some title
    /// word starting with it. A request without words matches nothing.
    ///
    /// Results follow collection order, but callers should not rely on it.
    pub fn query(&self, request: &str) -> Vec<&'a T> {
        let mut words = tokenize::query_tokens(request);
        let Some(first) = words.next() else {
            trace!(request, "word query without words");
            return Vec::new();
        };

        let mut matched = self.candidates(first);
        for word in words {
            if matched.is_empty() {
                break;
            }
            matched = &matched & &self.candidates(word);
        }

        trace!(request, hits = matched.len(), "word query");
        matched
            .into_iter()
            .map(|position| &self.items[position])
            .collect()
    }

    /// Union of the postings whose token starts with `word`.
    fn candidates(&self, word: &str) -> BTreeSet<usize> {
        let range = collate::prefix_range(&self.postings, Posting::token, word);
        self.postings[range]
            .iter()
            .flat_map(|posting| posting.items.iter().copied())
            .collect()
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl<'a, T: Titled> Matcher<'a, T> for WordMatch<'a, T> {
    fn query(&self, request: &str) -> Vec<&'a T> {
        WordMatch::query(self, request)
    }
}
