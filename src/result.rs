//! The outcome of a completed parse run.

use stillwater::Validation;

use crate::error::{RowError, RowErrors};

/// Accumulated outcome of a parse: every valid record, or every row report.
pub type ParseValidation<T> = Validation<Vec<T>, RowErrors>;

/// Valid records and row reports, both in input order.
///
/// Every row of a lenient run lands in exactly one of the two collections.
/// A strict run that returns a `ParseResult` has no row errors.
///
/// # Example
///
/// ```rust
/// use rowbind::{ParseResult, RowContext, RowError};
///
/// let result: ParseResult<&str> = ParseResult::new(
///     vec!["SG08"],
///     vec![RowError::new(2, RowContext::Validation, vec!["Field must not be blank".into()])],
/// );
///
/// assert!(result.has_errors());
/// let errors = result.raise_if_errors().unwrap_err();
/// assert_eq!(errors.first().row_number(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    valid_rows: Vec<T>,
    row_errors: Vec<RowError>,
}

impl<T> ParseResult<T> {
    pub fn new(valid_rows: Vec<T>, row_errors: Vec<RowError>) -> Self {
        Self {
            valid_rows,
            row_errors,
        }
    }

    /// Records that bound and validated cleanly.
    pub fn valid_rows(&self) -> &[T] {
        &self.valid_rows
    }

    /// Reports for rejected rows.
    pub fn row_errors(&self) -> &[RowError] {
        &self.row_errors
    }

    pub fn has_errors(&self) -> bool {
        !self.row_errors.is_empty()
    }

    /// Number of rows the run looked at.
    pub fn total_rows(&self) -> usize {
        self.valid_rows.len() + self.row_errors.len()
    }

    /// Fails with every row report, in order, if any row was rejected.
    pub fn raise_if_errors(&self) -> Result<(), RowErrors> {
        if self.has_errors() {
            Err(RowErrors::from_vec(self.row_errors.clone()))
        } else {
            Ok(())
        }
    }

    /// Converts into an accumulating validation: success only when no row
    /// was rejected.
    pub fn into_validation(self) -> ParseValidation<T> {
        if self.row_errors.is_empty() {
            Validation::Success(self.valid_rows)
        } else {
            Validation::Failure(RowErrors::from_vec(self.row_errors))
        }
    }

    pub fn into_valid_rows(self) -> Vec<T> {
        self.valid_rows
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<RowError>) {
        (self.valid_rows, self.row_errors)
    }
}

impl<T> Default for ParseResult<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
