use crate::types::title::Title;
use nutype::nutype;
use serde::{Deserialize, Serialize};

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
))]
pub struct ItemId(u32);

/// Anything a matcher can search: it only needs to expose a title.
pub trait Titled {
    fn title(&self) -> &str;
}

/// A launcher entry as loaded from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: Title,
}

impl Item {
    pub fn new(id: ItemId, title: Title) -> Self {
        Self { id, title }
    }
}

impl Titled for Item {
    fn title(&self) -> &str {
        self.title.as_str()
    }
}

impl Titled for Title {
    fn title(&self) -> &str {
        self.as_str()
    }
}

impl Titled for str {
    fn title(&self) -> &str {
        self
    }
}

impl Titled for String {
    fn title(&self) -> &str {
        self.as_str()
    }
}

impl<T: Titled + ?Sized> Titled for &T {
    fn title(&self) -> &str {
        (**self).title()
    }
}
