use crate::matcher::Matcher;
use sift_core::Titled;
use sift_core::collate;
use tracing::{debug, trace};

/// Prefix match on the whole title.
///
/// Holds references to the items in case-insensitive title order. Input that
/// is already sorted (see `Catalog::sort_by_title`) is used as is; anything
/// else is sorted once here, so queries never see an unsorted sequence.
pub struct ExactMatch<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T: Titled> ExactMatch<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        let mut items: Vec<&'a T> = items.iter().collect();
        if !collate::is_sorted_by(&items, |item| item.title()) {
            debug!(items = items.len(), "exact index input is unsorted, sorting");
            collate::sort_by(&mut items, |item| item.title());
        }
        debug!(items = items.len(), "built exact index");
        Self { items }
    }

    /// Items whose title starts with `request`, ignoring case, in title order.
    pub fn query(&self, request: &str) -> Vec<&'a T> {
        let range = collate::prefix_range(&self.items, |item| item.title(), request);
        trace!(request, hits = range.len(), "exact query");
        self.items[range].to_vec()
    }
}

impl<'a, T: Titled> Matcher<'a, T> for ExactMatch<'a, T> {
    fn query(&self, request: &str) -> Vec<&'a T> {
        ExactMatch::query(self, request)
    }
}
