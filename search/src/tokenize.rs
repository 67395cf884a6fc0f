//! Splitting titles and requests into words.

/// Letters, digits and `_`; everything else separates words in a title.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Maximal runs of word characters in `title`.
pub fn title_tokens(title: &str) -> impl Iterator<Item = &str> {
    title
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}

/// Space-separated words of a request. Only `' '` separates.
pub fn query_tokens(request: &str) -> impl Iterator<Item = &str> {
    request.split(' ').filter(|token| !token.is_empty())
}
