//! Conversion, binding and parse-level errors.

use crate::error::SchemaError;
use crate::value::TargetType;

/// A raw cell could not be converted into its target type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to convert value '{raw}' to {target}: {cause}")]
pub struct ConversionError {
    /// The trimmed raw value.
    pub raw: String,
    /// The type the value was being converted into.
    pub target: TargetType,
    /// Why conversion failed.
    pub cause: String,
}

impl ConversionError {
    pub fn new(raw: impl Into<String>, target: TargetType, cause: impl ToString) -> Self {
        Self {
            raw: raw.into(),
            target,
            cause: cause.to_string(),
        }
    }
}

/// A row that could not be bound to a record.
///
/// Binding is all-or-nothing: either failure leaves no usable instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// A required column is absent from the row.
    #[error("required field '{column}' is missing")]
    MissingColumn { column: String, row: u64 },

    /// A present cell failed type conversion.
    #[error("column '{column}': {source}")]
    Conversion {
        column: String,
        row: u64,
        #[source]
        source: ConversionError,
    },
}

impl StructuralError {
    /// The column that blocked binding.
    pub fn column(&self) -> &str {
        match self {
            StructuralError::MissingColumn { column, .. } => column,
            StructuralError::Conversion { column, .. } => column,
        }
    }

    /// The 1-based data row number.
    pub fn row(&self) -> u64 {
        match self {
            StructuralError::MissingColumn { row, .. } => *row,
            StructuralError::Conversion { row, .. } => *row,
        }
    }
}

/// A failed validator, tagged with the column it checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column '{column}': {message}")]
pub struct FieldViolation {
    pub column: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            message: message.into(),
        }
    }
}

/// A failed parse call.
///
/// In strict mode the first structural or validation failure aborts the run
/// and is returned here; lenient runs only fail for input or setup problems.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The first row that failed to bind (strict mode).
    #[error("row {}: {}", .0.row(), .0)]
    Structural(#[from] StructuralError),

    /// The first row that failed validation (strict mode), with every
    /// violation found in it.
    #[error("row {row}: {}", join_violations(.violations))]
    Validation {
        row: u64,
        violations: Vec<FieldViolation>,
    },

    /// The schema for the record type could not be built.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The delimiter is not a single-byte character.
    #[error("delimiter '{0}' is not an ASCII character")]
    InvalidDelimiter(char),

    /// The header line names the same column twice.
    #[error("column '{0}' appears more than once in the header")]
    DuplicateHeader(String),

    /// The delimited text could not be tokenized or read.
    #[error("failed to read delimited input: {0}")]
    Tokenize(#[from] csv::Error),

    /// The input file could not be opened.
    #[error("failed to open input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The data row the failure belongs to, if it is row-level.
    pub fn row(&self) -> Option<u64> {
        match self {
            ParseError::Structural(e) => Some(e.row()),
            ParseError::Validation { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// The column that caused a row-level failure. For validation failures
    /// this is the first offending column.
    pub fn column(&self) -> Option<&str> {
        match self {
            ParseError::Structural(e) => Some(e.column()),
            ParseError::Validation { violations, .. } => {
                violations.first().map(|v| v.column.as_str())
            }
            _ => None,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::new("abc", TargetType::Int32, "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "failed to convert value 'abc' to int32: invalid digit found in string"
        );
    }

    #[test]
    fn test_structural_error_accessors() {
        let err = StructuralError::MissingColumn {
            column: "job".to_string(),
            row: 1,
        };
        assert_eq!(err.column(), "job");
        assert_eq!(err.row(), 1);
        assert_eq!(err.to_string(), "required field 'job' is missing");
    }

    #[test]
    fn test_parse_error_identifies_row() {
        let err = ParseError::from(StructuralError::MissingColumn {
            column: "job".to_string(),
            row: 3,
        });
        assert_eq!(err.row(), Some(3));
        assert_eq!(err.to_string(), "row 3: required field 'job' is missing");

        let err = ParseError::Validation {
            row: 2,
            violations: vec![
                FieldViolation::new("name", "Field must not be blank"),
                FieldViolation::new("age", "Value must be less than or equal to 30"),
            ],
        };
        assert_eq!(err.column(), Some("name"));
        assert_eq!(
            err.to_string(),
            "row 2: column 'name': Field must not be blank, column 'age': Value must be less than or equal to 30"
        );
    }

    #[test]
    fn test_conversion_structural_error_keeps_source() {
        use std::error::Error;

        let err = StructuralError::Conversion {
            column: "age".to_string(),
            row: 4,
            source: ConversionError::new("x", TargetType::Int32, "bad"),
        };
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "column 'age': failed to convert value 'x' to int32: bad"
        );
    }
}
