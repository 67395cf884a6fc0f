use crate::types::ItemId;
use crate::types::TitleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid title on line {line}: {source}")]
    InvalidTitle {
        line: usize,
        #[source]
        source: TitleError,
    },

    #[error("invalid title at position {position}: {source}")]
    InvalidTitleAt {
        position: usize,
        #[source]
        source: TitleError,
    },

    #[error("too many items: position {0} does not fit an item id")]
    TooManyItems(usize),

    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// Errors that can occur when loading or saving config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown search mode: {0} (expected exact, word or fuzzy)")]
    InvalidMode(String),
}
