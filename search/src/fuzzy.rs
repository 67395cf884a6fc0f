//! Approximate matching.
//!
//! Each whitespace-separated atom of the request must occur in the title as a
//! case-insensitive subsequence. Candidates are scored with nucleo's fzf-style
//! scheme and kept when the score reaches `FuzzyConfig::min_score`. Scores only
//! filter; results keep collection order.

use crate::matcher::Matcher;
use nucleo::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher as NucleoMatcher, Utf32String};
use sift_core::{FuzzyConfig, Titled};
use tracing::{debug, trace};

pub struct FuzzyMatch<'a, T> {
    items: &'a [T],
    /// Titles pre-converted for the matcher, parallel to `items`.
    haystacks: Vec<Utf32String>,
    unicode_normalization: bool,
    min_score: u32,
}

impl<'a, T: Titled> FuzzyMatch<'a, T> {
    pub fn new(items: &'a [T], config: &FuzzyConfig) -> Self {
        let haystacks = items
            .iter()
            .map(|item| Utf32String::from(item.title()))
            .collect();
        debug!(
            items = items.len(),
            min_score = config.min_score,
            "built fuzzy index"
        );

        Self {
            items,
            haystacks,
            unicode_normalization: config.unicode_normalization,
            min_score: config.min_score,
        }
    }

    /// A blank request matches every item.
    pub fn query(&self, request: &str) -> Vec<&'a T> {
        if request.trim().is_empty() {
            return self.items.iter().collect();
        }

        let normalization = if self.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };
        let pattern = Pattern::new(request, CaseMatching::Ignore, normalization, AtomKind::Fuzzy);
        let mut matcher = NucleoMatcher::new(NucleoConfig::DEFAULT);

        let results: Vec<&'a T> = self
            .items
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, haystack)| {
                pattern
                    .score(haystack.slice(..), &mut matcher)
                    .is_some_and(|score| score >= self.min_score)
            })
            .map(|(item, _)| item)
            .collect();

        trace!(request, hits = results.len(), "fuzzy query");
        results
    }
}

impl<'a, T: Titled> Matcher<'a, T> for FuzzyMatch<'a, T> {
    fn query(&self, request: &str) -> Vec<&'a T> {
        FuzzyMatch::query(self, request)
    }
}
