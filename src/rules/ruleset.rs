//! Custom ruleset files
//!
//! A ruleset is versionable TOML data: an explicit `check_order` plus one
//! `[categories.<id>]` table per category. Loading validates everything the
//! builtin tables guarantee by construction; any inconsistency is fatal.
//!
//! ```toml
//! check_order = ["self_harm", "spam_and_fraud"]
//!
//! [categories.self_harm]
//! description = "Suicide and self-injury"
//! patterns = ["\\bcommit\\s+suicide\\b"]
//! message = "Support is available: call or text 988."
//!
//! [categories.spam_and_fraud]
//! patterns = ["\\bphishing\\s+email\\b"]
//! message = "Blocked as spam or fraud."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::RulesetError;
use crate::rules::{Category, CategoryDef, RuleRegistry};

/// On-disk ruleset structure.
#[derive(Debug, Deserialize)]
pub struct RulesetFile {
    /// Scan priority, category ids, each defined category exactly once.
    pub check_order: Vec<String>,

    /// Category definitions keyed by id.
    pub categories: BTreeMap<String, CategoryEntry>,
}

/// One category table in a ruleset file.
#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    #[serde(default)]
    pub description: String,
    pub patterns: Vec<String>,
    pub message: String,
}

impl RuleRegistry {
    /// Parse and validate a ruleset from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RulesetError> {
        let file: RulesetFile = toml::from_str(text)?;

        let mut defs = Vec::with_capacity(file.categories.len());
        for (id, entry) in file.categories {
            let category =
                Category::from_id(&id).ok_or_else(|| RulesetError::UnknownCategoryId(id.clone()))?;
            defs.push((
                category,
                CategoryDef {
                    description: entry.description,
                    patterns: entry.patterns,
                    message: entry.message,
                },
            ));
        }

        let mut order = Vec::with_capacity(file.check_order.len());
        for id in &file.check_order {
            let category =
                Category::from_id(id).ok_or_else(|| RulesetError::UnknownCategoryId(id.clone()))?;
            order.push(category);
        }

        Self::new(defs, &order)
    }

    /// Load and validate a ruleset file.
    pub fn from_file(path: &Path) -> Result<Self, RulesetError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
