//! Input parsing for the task envelope
//!
//! The orchestration layer sends one JSON object per task on stdin. Only the
//! task text is required; id and agent fields are carried through to the
//! audit log.

use serde::Deserialize;

/// A task submitted for screening.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskInput {
    /// The free-text task description to screen. Accepts the older
    /// `text`/`description` field names from earlier orchestrator versions.
    #[serde(alias = "text", alias = "description")]
    pub task: String,

    /// Optional task identifier, echoed into the audit log.
    #[serde(default)]
    pub task_id: Option<String>,

    /// Optional submitting agent name, echoed into the audit log.
    #[serde(default)]
    pub agent: Option<String>,
}

impl TaskInput {
    /// Parse a task envelope from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Wrap raw text in an envelope (used by the `--text` CLI path).
    pub fn from_text(text: impl Into<String>) -> Self {
        TaskInput {
            task: text.into(),
            task_id: None,
            agent: None,
        }
    }

    /// A truncated one-line summary for the audit log.
    pub fn summary(&self) -> String {
        let mut summary: String = self.task.chars().take(100).collect();
        if summary.len() < self.task.len() {
            summary.push_str("...");
        }
        summary
    }
}
