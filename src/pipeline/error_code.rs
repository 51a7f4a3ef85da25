//! Stable machine-readable codes for configuration diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a configuration problem.
///
/// Codes serialize as `snake_case` strings and are stable across releases,
/// so callers can match on them instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A value is outside its allowed range.
    InvalidValue,
    /// Individually valid values that conflict with each other.
    InvalidCombo,
    /// A size or runtime limit is unusable.
    LimitExceeded,
    /// A field the schema does not recognize.
    UnknownField,
    /// The spec version is not supported.
    UnsupportedVersion,
    /// No linguistic resources exist for the requested language.
    UnsupportedLanguage,
    /// Validation failed for a reason not covered above.
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid_value",
            Self::InvalidCombo => "invalid_combo",
            Self::LimitExceeded => "limit_exceeded",
            Self::UnknownField => "unknown_field",
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_as_str() {
        for code in [
            ErrorCode::InvalidValue,
            ErrorCode::InvalidCombo,
            ErrorCode::LimitExceeded,
            ErrorCode::UnknownField,
            ErrorCode::UnsupportedVersion,
            ErrorCode::UnsupportedLanguage,
            ErrorCode::ValidationFailed,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
