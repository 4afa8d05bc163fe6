//! Error types for taskgate
//!
//! A broken ruleset is a startup failure, never a per-request outcome.
//! Policy rejections are not errors; they are ordinary
//! [`ClassificationResult`](crate::output::ClassificationResult) values.

use crate::rules::Category;
use thiserror::Error;

/// Fatal ruleset configuration errors.
///
/// Any of these aborts engine construction. A rule that fails to load is
/// never skipped.
#[derive(Debug, Error)]
pub enum RulesetError {
    /// A category is defined more than once.
    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(Category),

    /// A ruleset file names a category id the gate does not know.
    #[error("unknown category id '{0}' in ruleset")]
    UnknownCategoryId(String),

    /// A defined category is missing from the check order.
    #[error("category '{0}' is defined but missing from check_order")]
    NotInCheckOrder(Category),

    /// The check order names a category with no definition.
    #[error("check_order names category '{0}' but it has no definition")]
    UndefinedInOrder(Category),

    /// A category appears more than once in the check order.
    #[error("category '{0}' appears more than once in check_order")]
    DuplicateInCheckOrder(Category),

    /// A detection pattern failed to compile.
    #[error("invalid pattern '{pattern}' in category '{category}': {source}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Failed to read a ruleset file.
    #[error("failed to read ruleset file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a ruleset file as TOML.
    #[error("failed to parse ruleset file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors loading the gate configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the config file as TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
