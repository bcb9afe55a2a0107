use serde::{Deserialize, Serialize};
use std::fmt;

/// Remediation shown when `strings.Repeat` is used without importing `strings`.
pub const STRINGS_IMPORT_HELP: &str = "To use strings.Repeat add import:
import \"strings\"

or in import block:
import (
    \"fmt\"
    \"strings\"
)";

/// Every way a run can fail.
///
/// The first seven variants are validation failures raised before any
/// evaluation happens. [`RunError::ExecutionFailure`] wraps anything that
/// went wrong while building the variable context or resolving prints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("Empty code")]
    EmptySource,
    #[error("Unclosed parenthesis in print()")]
    UnclosedPrintCall,
    #[error("Invalid assignment: {line}")]
    InvalidAssignment { line: String },
    #[error("Error: missing \"package main\" declaration")]
    MissingPackageDeclaration,
    #[error("Error: missing imports")]
    MissingImport,
    #[error("Code must contain at least one fmt.Println() command")]
    NoPrintStatement,
    #[error("{}", STRINGS_IMPORT_HELP)]
    MissingStringsImport,
    #[error("Execution error: {cause}")]
    ExecutionFailure { cause: String },
}

impl RunError {
    /// The fieldless tag for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySource => ErrorKind::EmptySource,
            Self::UnclosedPrintCall => ErrorKind::UnclosedPrintCall,
            Self::InvalidAssignment { .. } => ErrorKind::InvalidAssignment,
            Self::MissingPackageDeclaration => ErrorKind::MissingPackageDeclaration,
            Self::MissingImport => ErrorKind::MissingImport,
            Self::NoPrintStatement => ErrorKind::NoPrintStatement,
            Self::MissingStringsImport => ErrorKind::MissingStringsImport,
            Self::ExecutionFailure { .. } => ErrorKind::ExecutionFailure,
        }
    }

    /// Wrap an evaluation failure, keeping only its message.
    pub fn execution(cause: impl fmt::Display) -> Self {
        Self::ExecutionFailure {
            cause: cause.to_string(),
        }
    }

    /// `true` for failures raised by a validator.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::ExecutionFailure { .. })
    }
}

/// Failure tag, serialized as the variant name for the browser boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    EmptySource,
    UnclosedPrintCall,
    InvalidAssignment,
    MissingPackageDeclaration,
    MissingImport,
    NoPrintStatement,
    MissingStringsImport,
    ExecutionFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RunError::EmptySource.to_string(), "Empty code");
        assert_eq!(
            RunError::InvalidAssignment {
                line: "x = ".into()
            }
            .to_string(),
            "Invalid assignment: x = "
        );
        assert_eq!(
            RunError::execution("repeat count must be finite").to_string(),
            "Execution error: repeat count must be finite"
        );
    }

    #[test]
    fn test_strings_import_message_has_both_forms() {
        let msg = RunError::MissingStringsImport.to_string();
        assert!(msg.contains("import \"strings\""));
        assert!(msg.contains("import (\n    \"fmt\"\n    \"strings\"\n)"));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(RunError::MissingImport.kind(), ErrorKind::MissingImport);
        assert_eq!(
            RunError::execution("boom").kind(),
            ErrorKind::ExecutionFailure
        );
    }

    #[test]
    fn test_validation_tier() {
        assert!(RunError::NoPrintStatement.is_validation());
        assert!(!RunError::execution("boom").is_validation());
    }

    #[test]
    fn test_kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&ErrorKind::MissingStringsImport).unwrap();
        assert_eq!(json, "\"MissingStringsImport\"");
        assert_eq!(ErrorKind::EmptySource.to_string(), "EmptySource");
    }
}
