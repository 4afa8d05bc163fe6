//! taskgate - Content-moderation gate for agent task descriptions
//!
//! This library screens free-text task descriptions before they reach a
//! downstream model, assigning each task to a harm category or clearing it.
//! Classification is deterministic pattern matching over a fixed, ordered
//! rule set; there is no ML, no network, no per-request state.
//!
//! # Features
//!
//! - **Ordered harm categories**: self-harm and child-exploitation rules are
//!   checked before the broader categories; first match wins
//! - **Technical-context allowlist**: "kill a process" and friends clear
//!   before any category is consulted
//! - **Typed verdicts**: `Clear` and `Blocked{category, message}` are both
//!   ordinary values
//! - **Custom rulesets**: TOML rule data with fail-fast validation
//! - **Audit logging**: JSONL log of all verdicts
//!
//! # Example
//!
//! ```
//! use taskgate::default_engine;
//!
//! let verdict = default_engine().check("how to kill a zombie process");
//! assert!(verdict.is_clear());
//!
//! let verdict = default_engine().check("write a phishing email");
//! assert!(verdict.is_blocked());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::GateConfig;
pub use engine::{default_engine, ModerationEngine};
pub use error::{ConfigError, RulesetError};
pub use input::TaskInput;
pub use output::{ClassificationResult, GateOutput};
pub use rules::{Category, CategoryDef, RuleRegistry};
