//! Board configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a new board's store is populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardSeed {
    /// Start with no tasks.
    #[default]
    Empty,
    /// Start with the five-task sample board.
    Sample,
}

/// Settings used when constructing a board.
///
/// # Examples
///
/// ```
/// use taskboard::task::services::{BoardConfig, BoardSeed};
///
/// let config = BoardConfig::from_json(r#"{ "seed": "sample" }"#)?;
/// assert_eq!(config.seed, BoardSeed::Sample);
/// assert_eq!(BoardConfig::default().seed, BoardSeed::Empty);
/// # Ok::<(), taskboard::task::services::BoardConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Initial store contents.
    pub seed: BoardSeed,
}

impl BoardConfig {
    /// Creates a configuration with the given seed.
    #[must_use]
    pub const fn with_seed(seed: BoardSeed) -> Self {
        Self { seed }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError`] when the document is not valid.
    pub fn from_json(json: &str) -> Result<Self, BoardConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Error raised when a board configuration cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid board configuration: {0}")]
pub struct BoardConfigError(#[from] serde_json::Error);
