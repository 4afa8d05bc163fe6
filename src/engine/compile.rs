//! Rule compilation
//!
//! Flattens a validated [`RuleRegistry`] into the ordered scan list used at
//! classification time. Runs once per engine; the result is read-only.

use regex::{Regex, RegexBuilder};

use crate::error::RulesetError;
use crate::rules::{Category, RuleRegistry};

/// One flattened scan rule: a compiled pattern with its category and the
/// message shown when it blocks.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub category: Category,
    pub pattern: Regex,
    pub message: String,
}

/// Compile every pattern of every category, preserving scan order.
///
/// Patterns are compiled case-insensitively. A pattern that fails to compile
/// aborts the whole build; a broken rule is never skipped.
pub fn compile_registry(registry: &RuleRegistry) -> Result<Vec<CompiledRule>, RulesetError> {
    let mut rules = Vec::new();

    for (category, def) in registry.categories() {
        for pattern in &def.patterns {
            let compiled = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| RulesetError::InvalidPattern {
                    category: *category,
                    pattern: pattern.clone(),
                    source,
                })?;

            rules.push(CompiledRule {
                category: *category,
                pattern: compiled,
                message: def.message.clone(),
            });
        }
    }

    Ok(rules)
}
