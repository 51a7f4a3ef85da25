//! Structured configuration errors.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// A single configuration problem located by JSON pointer.
///
/// Displays as `[code] path: message (hint: ...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("[{code}] {path}: {message}{}", hint_suffix(.hint))]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field, e.g. `/rank/damping`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|h| format!(" (hint: {h})"))
        .unwrap_or_default()
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a suggestion for fixing the problem.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
