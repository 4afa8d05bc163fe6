//! JSONL audit logging for taskgate
//!
//! Records every moderation verdict to a JSONL file for later analysis.
//! Audit records never feed back into classification.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::TaskInput;
use crate::output::ClassificationResult;
use crate::rules::Category;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Cleared,
    Blocked,
    /// Blocked verdict reported as clear (shadow mode); logged for tuning.
    Shadowed,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the verdict
    pub timestamp: DateTime<Utc>,

    /// Log level (CLEARED, BLOCKED, SHADOWED)
    pub level: LogLevel,

    /// Category that matched (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Truncated task text
    pub task_summary: String,

    /// Task identifier (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Submitting agent (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from a task and its verdict.
    pub fn new(input: &TaskInput, result: &ClassificationResult, shadow: bool) -> Self {
        let level = match result {
            ClassificationResult::Clear => LogLevel::Cleared,
            ClassificationResult::Blocked { .. } if shadow => LogLevel::Shadowed,
            ClassificationResult::Blocked { .. } => LogLevel::Blocked,
        };

        Self {
            timestamp: Utc::now(),
            level,
            category: result.category(),
            task_summary: input.summary(),
            task_id: input.task_id.clone(),
            agent: input.agent.clone(),
        }
    }
}

/// Audit logger
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            // Ensure parent directory exists
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a verdict
    pub fn log_verdict(
        &mut self,
        input: &TaskInput,
        result: &ClassificationResult,
        shadow: bool,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(input, result, shadow);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}

/// Create a disabled logger (for when audit logging is off)
impl Default for AuditLogger {
    fn default() -> Self {
        Self { writer: None }
    }
}
