//! Classification results and gate output
//!
//! `ClassificationResult` is the engine's only artifact: cleared or blocked.
//! Both outcomes are ordinary values; a policy rejection is the designed
//! output, not an error path. `GateOutput` is the JSON envelope the CLI and
//! orchestration layers consume.

use serde::Serialize;

use crate::rules::Category;

/// The outcome of screening one task description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResult {
    /// No harm category matched; the task may proceed.
    Clear,

    /// A harm category matched; the task must not be executed.
    Blocked {
        category: Category,
        /// Shown verbatim to the user.
        message: String,
    },
}

impl ClassificationResult {
    /// Create a blocked result.
    pub fn blocked(category: Category, message: impl Into<String>) -> Self {
        ClassificationResult::Blocked {
            category,
            message: message.into(),
        }
    }

    /// Check if the task was cleared.
    pub fn is_clear(&self) -> bool {
        matches!(self, ClassificationResult::Clear)
    }

    /// Check if the task was blocked.
    pub fn is_blocked(&self) -> bool {
        matches!(self, ClassificationResult::Blocked { .. })
    }

    /// The matched category, if blocked.
    pub fn category(&self) -> Option<Category> {
        match self {
            ClassificationResult::Clear => None,
            ClassificationResult::Blocked { category, .. } => Some(*category),
        }
    }

    /// The user-facing message, if blocked.
    pub fn message(&self) -> Option<&str> {
        match self {
            ClassificationResult::Clear => None,
            ClassificationResult::Blocked { message, .. } => Some(message),
        }
    }
}

/// JSON verdict written to stdout by the gate binary.
#[derive(Debug, Serialize)]
pub struct GateOutput {
    /// "clear" or "blocked".
    pub verdict: &'static str,

    /// Matched category id, present only when blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Message to surface verbatim to the user, present only when blocked.
    #[serde(rename = "userMessage", skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
}

impl GateOutput {
    /// A clear verdict.
    pub fn clear() -> Self {
        GateOutput {
            verdict: "clear",
            category: None,
            user_message: None,
        }
    }

    /// A blocked verdict.
    pub fn blocked(category: Category, message: impl Into<String>) -> Self {
        GateOutput {
            verdict: "blocked",
            category: Some(category),
            user_message: Some(message.into()),
        }
    }

    /// Build the output for a classification result.
    pub fn from_result(result: &ClassificationResult) -> Self {
        match result {
            ClassificationResult::Clear => GateOutput::clear(),
            ClassificationResult::Blocked { category, message } => {
                GateOutput::blocked(*category, message.clone())
            }
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"verdict":"blocked"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_result_accessors() {
        let result = ClassificationResult::Clear;
        assert!(result.is_clear());
        assert!(!result.is_blocked());
        assert_eq!(result.category(), None);
        assert_eq!(result.message(), None);
    }

    #[test]
    fn test_blocked_result_accessors() {
        let result = ClassificationResult::blocked(Category::SelfHarm, "call 988");
        assert!(result.is_blocked());
        assert_eq!(result.category(), Some(Category::SelfHarm));
        assert_eq!(result.message(), Some("call 988"));
    }

    #[test]
    fn test_clear_output_json() {
        let json = GateOutput::clear().to_json();
        assert_eq!(json, r#"{"verdict":"clear"}"#);
    }

    #[test]
    fn test_blocked_output_json() {
        let json = GateOutput::blocked(Category::SpamAndFraud, "blocked").to_json();
        assert!(json.contains(r#""verdict":"blocked""#));
        assert!(json.contains(r#""category":"spam_and_fraud""#));
        assert!(json.contains(r#""userMessage":"blocked""#));
    }

    #[test]
    fn test_from_result_round_trip() {
        let blocked = ClassificationResult::blocked(Category::IllegalActivity, "no");
        let output = GateOutput::from_result(&blocked);
        assert_eq!(output.verdict, "blocked");
        assert_eq!(output.category, Some(Category::IllegalActivity));

        let output = GateOutput::from_result(&ClassificationResult::Clear);
        assert_eq!(output.verdict, "clear");
        assert!(output.category.is_none());
    }
}
