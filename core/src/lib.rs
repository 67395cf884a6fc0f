pub mod catalog;
pub mod collate;
pub mod error;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, ConfigError, Error, Result};
pub use types::{
    FuzzyConfig, Item, ItemId, MAX_TITLE_LENGTH, SearchConfig, SearchMode, SearchSettings, Title,
    TitleError, Titled,
};
