//! Moderation rules for taskgate
//!
//! Defines the harm categories, the rule registry, and the technical-context
//! allowlist.

pub mod allowlist;
pub mod categories;
pub mod ruleset;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RulesetError;

/// A harm category the gate can assign to a task.
///
/// The set is closed: adding a category is a code change, which keeps the
/// check-order completeness invariant enforceable by exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Suicide and self-injury.
    SelfHarm,

    /// Sexual exploitation of minors.
    ChildExploitation,

    /// Weapons, drugs, intrusion, and other criminal facilitation.
    IllegalActivity,

    /// Violence against people or animals, and threats of it.
    ViolenceAndThreats,

    /// Hate speech, harassment, and doxxing.
    HateAndHarassment,

    /// Phishing, scams, and bulk unsolicited messaging.
    SpamAndFraud,
}

impl Category {
    /// Scan priority, most safety-critical and most specific first.
    ///
    /// Self-harm and child exploitation are checked before the broader
    /// illegal-activity and violence categories so that an input matching
    /// both resolves to the more specific one; spam/fraud is checked last.
    /// This ordering is policy, not an implementation detail.
    pub const CHECK_ORDER: [Category; 6] = [
        Category::SelfHarm,
        Category::ChildExploitation,
        Category::IllegalActivity,
        Category::ViolenceAndThreats,
        Category::HateAndHarassment,
        Category::SpamAndFraud,
    ];

    /// Stable snake_case identifier used in ruleset files and audit records.
    pub fn id(&self) -> &'static str {
        match self {
            Category::SelfHarm => "self_harm",
            Category::ChildExploitation => "child_exploitation",
            Category::IllegalActivity => "illegal_activity",
            Category::ViolenceAndThreats => "violence_and_threats",
            Category::HateAndHarassment => "hate_and_harassment",
            Category::SpamAndFraud => "spam_and_fraud",
        }
    }

    /// Parse a category from its identifier.
    pub fn from_id(id: &str) -> Option<Category> {
        match id {
            "self_harm" => Some(Category::SelfHarm),
            "child_exploitation" => Some(Category::ChildExploitation),
            "illegal_activity" => Some(Category::IllegalActivity),
            "violence_and_threats" => Some(Category::ViolenceAndThreats),
            "hate_and_harassment" => Some(Category::HateAndHarassment),
            "spam_and_fraud" => Some(Category::SpamAndFraud),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The definition of one category: what it covers, how it is detected, and
/// what the blocked user is told.
#[derive(Debug, Clone)]
pub struct CategoryDef {
    /// Human-readable description for operators.
    pub description: String,

    /// Detection patterns, compiled case-insensitively, checked in order.
    pub patterns: Vec<String>,

    /// Message shown verbatim to the user when this category blocks a task.
    pub message: String,
}

/// An immutable set of category definitions in scan priority order.
///
/// Construction validates the check-order invariant: every defined category
/// appears in the order exactly once and vice versa. Once built, a registry
/// is read-only; it is shared data for every classification made from it.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    entries: Vec<(Category, CategoryDef)>,
}

impl RuleRegistry {
    /// Build a registry from category definitions and an explicit check
    /// order. Fails on duplicates, omissions, or unknown order entries.
    pub fn new(
        defs: Vec<(Category, CategoryDef)>,
        check_order: &[Category],
    ) -> Result<Self, RulesetError> {
        for (i, (category, _)) in defs.iter().enumerate() {
            if defs[..i].iter().any(|(c, _)| c == category) {
                return Err(RulesetError::DuplicateCategory(*category));
            }
        }
        for (i, category) in check_order.iter().enumerate() {
            if check_order[..i].contains(category) {
                return Err(RulesetError::DuplicateInCheckOrder(*category));
            }
            if !defs.iter().any(|(c, _)| c == category) {
                return Err(RulesetError::UndefinedInOrder(*category));
            }
        }
        for (category, _) in &defs {
            if !check_order.contains(category) {
                return Err(RulesetError::NotInCheckOrder(*category));
            }
        }

        let mut defs = defs;
        let mut entries = Vec::with_capacity(check_order.len());
        for category in check_order {
            let pos = defs
                .iter()
                .position(|(c, _)| c == category)
                .unwrap_or_else(|| unreachable!("order entry '{category}' validated above"));
            entries.push(defs.swap_remove(pos));
        }

        Ok(Self { entries })
    }

    /// The built-in registry, from the embedded category tables.
    pub fn builtin() -> Self {
        let defs = categories::BUILTIN_CATEGORIES
            .iter()
            .map(|c| {
                (
                    c.category,
                    CategoryDef {
                        description: c.description.to_string(),
                        patterns: c.patterns.iter().map(|p| p.to_string()).collect(),
                        message: c.message.to_string(),
                    },
                )
            })
            .collect();

        // The embedded tables cover CHECK_ORDER exactly; a mismatch is a
        // programming error caught by the registry tests.
        match Self::new(defs, &Category::CHECK_ORDER) {
            Ok(registry) => registry,
            Err(e) => unreachable!("builtin category tables are invalid: {e}"),
        }
    }

    /// All categories with their definitions, in scan priority order.
    pub fn categories(&self) -> &[(Category, CategoryDef)] {
        &self.entries
    }

    /// The scan priority list.
    pub fn check_order(&self) -> Vec<Category> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    /// Look up one category's definition.
    pub fn get(&self, category: Category) -> Option<&CategoryDef> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, def)| def)
    }
}
