//! Case-insensitive ordering shared by every matcher.
//!
//! Strings are compared through the `char::to_lowercase` expansion of each
//! character, so `"Foo"`, `"FOO"` and `"foo"` are equal. Both orderings are
//! consistent with each other, which is what makes [`prefix_range`] valid on
//! anything sorted with [`compare`].

use std::cmp::Ordering;
use std::ops::Range;

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Owned case-folded copy of `s`.
///
/// Byte order of folded keys is the same order as [`compare`], so folded keys
/// can be used directly as `BTreeMap` keys.
pub fn fold_key(s: &str) -> String {
    fold(s).collect()
}

/// Case-insensitive total order.
pub fn compare(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b))
}

/// Orders `s` against the set of strings starting with `prefix`.
///
/// Returns `Equal` when `prefix` case-insensitively prefixes `s`, `Less` when
/// `s` sorts before every such string and `Greater` when it sorts after.
pub fn compare_prefix(s: &str, prefix: &str) -> Ordering {
    let mut s = fold(s);
    for p in fold(prefix) {
        match s.next() {
            None => return Ordering::Less,
            Some(c) => match c.cmp(&p) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
    Ordering::Equal
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    compare_prefix(s, prefix) == Ordering::Equal
}

/// Returns true if `items` is non-decreasing under [`compare`] on `key`.
pub fn is_sorted_by<E>(items: &[E], key: impl Fn(&E) -> &str) -> bool {
    items
        .windows(2)
        .all(|pair| compare(key(&pair[0]), key(&pair[1])) != Ordering::Greater)
}

/// Stable sort by [`compare`] on `key`.
pub fn sort_by<E>(items: &mut [E], key: impl Fn(&E) -> &str) {
    items.sort_by(|a, b| compare(key(a), key(b)));
}

/// Index range of the elements whose key starts with `prefix`.
///
/// `sorted` must be ordered by [`compare`] on `key`. The lower bound is the
/// first key not less than `prefix`, the upper bound the first key that sorts
/// after every string prefixed by it. An empty prefix spans the whole slice.
pub fn prefix_range<E>(sorted: &[E], key: impl Fn(&E) -> &str, prefix: &str) -> Range<usize> {
    let lower = sorted.partition_point(|e| compare(key(e), prefix) == Ordering::Less);
    let upper = lower
        + sorted[lower..]
            .partition_point(|e| compare_prefix(key(e), prefix) != Ordering::Greater);
    lower..upper
}

#[cfg(test)]
mod tests;
