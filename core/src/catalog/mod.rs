//! Item collections the matchers are built from.

use crate::collate;
use crate::error::CatalogError;
use crate::types::{Item, ItemId, Title, Titled};
use std::collections::HashSet;
use std::path::Path;

/// An ordered, read-only collection of launcher items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

/// Create operations.
impl Catalog {
    /// Rejects collections that reuse an [`ItemId`].
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Assigns sequential ids in iteration order. Errors carry the 0-based position.
    pub fn from_titles<I, S>(titles: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| {
                let title = Title::try_new(title.into())
                    .map_err(|source| CatalogError::InvalidTitleAt { position: i, source })?;
                Ok(Item::new(item_id(i)?, title))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Ok(Self { items })
    }

    /// One title per line. Blank lines are skipped.
    pub fn parse_lines(content: &str) -> Result<Self, CatalogError> {
        let mut items = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let title = Title::try_new(line.to_string())
                .map_err(|source| CatalogError::InvalidTitle { line: i + 1, source })?;
            items.push(Item::new(item_id(items.len())?, title));
        }
        Ok(Self { items })
    }

    /// JSON array of `{ "id": .., "title": .. }` objects.
    pub fn parse_json(content: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(content)?;
        Self::new(items)
    }

    /// Loads a `.json` catalog, or a plain title-per-line file for any other extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_lines(&content)
        }
    }
}

fn item_id(position: usize) -> Result<ItemId, CatalogError> {
    u32::try_from(position)
        .map(ItemId::new)
        .map_err(|_| CatalogError::TooManyItems(position))
}

/// Read operations.
impl Catalog {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_sorted_by_title(&self) -> bool {
        collate::is_sorted_by(&self.items, Item::title)
    }
}

/// Mutation operations.
impl Catalog {
    /// Stable sort by case-insensitive title, the order exact matching expects.
    pub fn sort_by_title(&mut self) {
        collate::sort_by(&mut self.items, Item::title);
    }
}

#[cfg(test)]
mod tests;
