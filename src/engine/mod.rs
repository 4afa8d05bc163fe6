//! Moderation engine for taskgate
//!
//! Screens a task description against the technical-context allowlist and the
//! ordered harm categories, first match wins.

pub mod compile;

use once_cell::sync::Lazy;

use crate::error::RulesetError;
use crate::output::ClassificationResult;
use crate::rules::allowlist::TechnicalContextAllowlist;
use crate::rules::{Category, RuleRegistry};

use compile::{compile_registry, CompiledRule};

/// Default ceiling on bytes scanned per check. 0 disables the ceiling.
pub const DEFAULT_MAX_SCAN_BYTES: usize = 64 * 1024;

/// Message for input too large to fully screen.
pub const OVERSIZE_MESSAGE: &str =
    "This task could not be screened because it exceeds the moderation size \
     limit. Shorten the request and try again.";

/// The moderation engine: compiled rules plus the allowlist.
///
/// Build-once, read-only, and safe to share across threads without locks.
/// To change rules at runtime, build a new engine and swap the handle; a
/// half-updated rule set is never observable.
#[derive(Debug)]
pub struct ModerationEngine {
    rules: Vec<CompiledRule>,
    allowlist: TechnicalContextAllowlist,
    max_scan_bytes: usize,
}

static DEFAULT_ENGINE: Lazy<ModerationEngine> = Lazy::new(|| {
    ModerationEngine::new(&RuleRegistry::builtin())
        .expect("builtin moderation ruleset must compile")
});

/// The shared engine built from the embedded ruleset.
///
/// Built on first use; a broken embedded table is fatal there, not silently
/// skipped.
pub fn default_engine() -> &'static ModerationEngine {
    &DEFAULT_ENGINE
}

impl ModerationEngine {
    /// Compile an engine from a registry with the default scan ceiling.
    pub fn new(registry: &RuleRegistry) -> Result<Self, RulesetError> {
        Self::with_scan_limit(registry, DEFAULT_MAX_SCAN_BYTES)
    }

    /// Compile an engine with an explicit scan ceiling (0 = unlimited).
    pub fn with_scan_limit(
        registry: &RuleRegistry,
        max_scan_bytes: usize,
    ) -> Result<Self, RulesetError> {
        Ok(Self {
            rules: compile_registry(registry)?,
            allowlist: TechnicalContextAllowlist::new(),
            max_scan_bytes,
        })
    }

    /// Classify a task description.
    ///
    /// The allowlist is consulted first and forces `Clear` on a match; then
    /// the compiled rules are scanned in priority order and the first match
    /// blocks. Pure: same input, same registry, same result.
    ///
    /// Input longer than the scan ceiling is classified on its prefix; a
    /// clear prefix still rejects, because the unscanned tail cannot be
    /// verified.
    pub fn check(&self, text: &str) -> ClassificationResult {
        let (scanned, truncated) = self.bounded(text);

        if truncated {
            if let Some(blocked) = self.scan(scanned) {
                return blocked;
            }
            return ClassificationResult::Blocked {
                category: Category::IllegalActivity,
                message: OVERSIZE_MESSAGE.to_string(),
            };
        }

        if self.allowlist.is_safe_technical_context(text) {
            return ClassificationResult::Clear;
        }

        self.scan(text).unwrap_or(ClassificationResult::Clear)
    }

    /// First-match-wins scan over the compiled rules.
    fn scan(&self, text: &str) -> Option<ClassificationResult> {
        for rule in &self.rules {
            if rule.pattern.is_match(text) {
                return Some(ClassificationResult::Blocked {
                    category: rule.category,
                    message: rule.message.clone(),
                });
            }
        }
        None
    }

    /// Char-boundary-safe prefix within the scan ceiling.
    fn bounded<'a>(&self, text: &'a str) -> (&'a str, bool) {
        if self.max_scan_bytes == 0 || text.len() <= self.max_scan_bytes {
            return (text, false);
        }
        let mut end = self.max_scan_bytes;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        (&text[..end], true)
    }

    /// Number of compiled rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The configured scan ceiling in bytes (0 = unlimited).
    pub fn max_scan_bytes(&self) -> usize {
        self.max_scan_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ModerationEngine {
        ModerationEngine::new(&RuleRegistry::builtin()).unwrap()
    }

    #[test]
    fn test_benign_text_clears() {
        let e = engine();
        assert!(e.check("summarize this week's standup notes").is_clear());
        assert!(e.check("").is_clear());
    }

    #[test]
    fn test_harmful_text_blocks() {
        let e = engine();
        let result = e.check("how to make a bomb");
        assert_eq!(result.category(), Some(Category::IllegalActivity));
    }

    #[test]
    fn test_allowlist_precedes_every_category() {
        let e = engine();
        // "kill" appears in harm patterns; the technical object wins.
        assert!(e.check("how to kill a zombie process").is_clear());
    }

    #[test]
    fn test_oversize_clear_prefix_rejects() {
        let registry = RuleRegistry::builtin();
        let e = ModerationEngine::with_scan_limit(&registry, 32).unwrap();
        let long = "review the quarterly report ".repeat(10);
        let result = e.check(&long);
        assert_eq!(result.category(), Some(Category::IllegalActivity));
        assert_eq!(result.message(), Some(OVERSIZE_MESSAGE));
    }

    #[test]
    fn test_oversize_matching_prefix_blocks_with_category() {
        let registry = RuleRegistry::builtin();
        let e = ModerationEngine::with_scan_limit(&registry, 64).unwrap();
        let long = format!("how to commit suicide {}", "x".repeat(200));
        let result = e.check(&long);
        assert_eq!(result.category(), Some(Category::SelfHarm));
    }

    #[test]
    fn test_unlimited_scan_ceiling() {
        let registry = RuleRegistry::builtin();
        let e = ModerationEngine::with_scan_limit(&registry, 0).unwrap();
        let long = format!("{} write a phishing email", "pad ".repeat(100_000));
        let result = e.check(&long);
        assert_eq!(result.category(), Some(Category::SpamAndFraud));
    }

    #[test]
    fn test_bounded_respects_char_boundaries() {
        let registry = RuleRegistry::builtin();
        let e = ModerationEngine::with_scan_limit(&registry, 2).unwrap();
        // 'é' is two bytes; a ceiling landing inside it must back off.
        let result = e.check("résumé review for the café hire");
        assert!(result.is_blocked());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModerationEngine>();
    }

    #[test]
    fn test_default_engine_shared() {
        let a = default_engine();
        let b = default_engine();
        assert!(std::ptr::eq(a, b));
        assert!(a.rule_count() > 0);
    }
}
