/// A built, read-only index answering requests with borrowed items.
pub trait Matcher<'a, T> {
    /// Never fails: an unmatched request yields an empty vector.
    fn query(&self, request: &str) -> Vec<&'a T>;
}
