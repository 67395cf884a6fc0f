pub(crate) mod config;
pub use config::{FuzzyConfig, SearchConfig, SearchMode, SearchSettings};

pub(crate) mod item;
pub use item::{Item, ItemId, Titled};

pub(crate) mod title;
pub use title::{MAX_TITLE_LENGTH, Title, TitleError};
