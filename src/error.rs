use thiserror::Error;

/// Errors raised by the formatting entry points.
///
/// Transliteration and validation never fail: unmapped characters pass
/// through and malformed phone numbers simply do not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A value did not have the shape the operation requires.
    #[error("{operation}: expected {expected}, got {found}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("fraction digits out of range: minimum {min}, maximum {max}")]
    FractionRange { min: usize, max: usize },
}

impl LocaleError {
    pub(crate) fn mismatch(
        operation: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        LocaleError::TypeMismatch {
            operation,
            expected,
            found: found.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LocaleError>;
