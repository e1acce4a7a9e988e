//! The parse loop.
//!
//! Each row goes through binding then validation and ends up either accepted
//! or rejected:
//!
//! ```text
//! Idle -> Binding(i) -> Validating(i) -> Accepted(i) | Rejected(i) -> Binding(i + 1) | Done
//! ```
//!
//! In strict mode the first rejection aborts the run. In lenient mode it is
//! recorded as a [`RowError`] and the loop moves on.

use crate::error::{FieldViolation, ParseError, RowContext, RowError, StructuralError};
use crate::result::ParseResult;
use crate::row::Row;
use crate::schema::SchemaDescriptor;

use super::binder::RowBinder;
use super::row_validator::RowValidator;

/// Why a row was not accepted.
enum Rejection {
    Structural(StructuralError),
    Invalid {
        row: u64,
        violations: Vec<FieldViolation>,
    },
}

impl Rejection {
    fn context(&self) -> RowContext {
        match self {
            Rejection::Structural(_) => RowContext::Structural,
            Rejection::Invalid { .. } => RowContext::Validation,
        }
    }

    fn into_row_error(self) -> RowError {
        match self {
            Rejection::Structural(error) => RowError::structural(&error),
            Rejection::Invalid { row, violations } => RowError::new(
                row,
                RowContext::Validation,
                violations.into_iter().map(|v| v.message).collect(),
            ),
        }
    }

    fn into_parse_error(self) -> ParseError {
        match self {
            Rejection::Structural(error) => ParseError::Structural(error),
            Rejection::Invalid { row, violations } => ParseError::Validation { row, violations },
        }
    }
}

/// Drives binding and validation over a sequence of rows.
///
/// Holds no state between runs: running it twice over the same rows yields
/// equal results.
pub struct ParseOrchestrator<'s, T> {
    binder: RowBinder<'s, T>,
    validator: RowValidator<'s, T>,
    strict: bool,
}

impl<'s, T: Default> ParseOrchestrator<'s, T> {
    pub fn new(schema: &'s SchemaDescriptor<T>, strict: bool) -> Self {
        Self {
            binder: RowBinder::new(schema),
            validator: RowValidator::new(schema),
            strict,
        }
    }

    /// Processes rows one at a time, in order.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first structural or validation failure as
    /// a [`ParseError`]; no partial result is produced. Lenient runs always
    /// succeed.
    pub fn run<I>(&self, rows: I) -> Result<ParseResult<T>, ParseError>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        let mut valid_rows = Vec::new();
        let mut row_errors = Vec::new();

        tracing::debug!(strict = self.strict, "parse run started");

        for row in rows {
            match self.process(&row) {
                Ok(record) => valid_rows.push(record),
                Err(rejection) if self.strict => {
                    let error = rejection.into_parse_error();
                    tracing::warn!(
                        row = row.row_number(),
                        accepted = valid_rows.len(),
                        %error,
                        "strict parse aborted"
                    );
                    return Err(error);
                }
                Err(rejection) => {
                    tracing::debug!(
                        row = row.row_number(),
                        context = rejection.context().as_str(),
                        "row rejected"
                    );
                    row_errors.push(rejection.into_row_error());
                }
            }
        }

        tracing::debug!(
            accepted = valid_rows.len(),
            rejected = row_errors.len(),
            "parse run finished"
        );
        Ok(ParseResult::new(valid_rows, row_errors))
    }

    /// Binds then validates a single row.
    fn process<R: Row + ?Sized>(&self, row: &R) -> Result<T, Rejection> {
        let record = self.binder.bind(row).map_err(Rejection::Structural)?;

        let violations = self.validator.violations(&record, row);
        if violations.is_empty() {
            Ok(record)
        } else {
            Err(Rejection::Invalid {
                row: row.row_number(),
                violations,
            })
        }
    }
}
