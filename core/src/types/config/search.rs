use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// User-facing search configuration, persisted as sift.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub fuzzy: FuzzyConfig,
}

impl SearchConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("sift.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.result_limit == Some(0) {
            errors.push("result_limit must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: SearchSettings {
                mode: self.search.mode,
                result_limit: match self.search.result_limit {
                    Some(0) => defaults.search.result_limit,
                    limit => limit,
                },
            },
            fuzzy: self.fuzzy.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub mode: SearchMode,
    /// Caps the number of items a query returns. `None` returns every match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_limit: Option<usize>,
}

/// Matching strategy used when a query does not name one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive prefix of the whole title.
    Exact,
    /// Every query word prefixes some word of the title.
    #[default]
    Word,
    /// Every query atom is a subsequence of the title.
    Fuzzy,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Exact => write!(f, "exact"),
            SearchMode::Word => write!(f, "word"),
            SearchMode::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(SearchMode::Exact),
            "word" | "words" => Ok(SearchMode::Word),
            "fuzzy" => Ok(SearchMode::Fuzzy),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// Fuzzy matcher settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Match `é` against `e` and similar Latin diacritics.
    #[serde(default = "default_true")]
    pub unicode_normalization: bool,
    /// Items scoring below this are dropped. 0 keeps every subsequence match.
    #[serde(default)]
    pub min_score: u32,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            unicode_normalization: true,
            min_score: 0,
        }
    }
}

fn default_true() -> bool {
    true
}
