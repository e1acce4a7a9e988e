//! Per-row error reports.
//!
//! A lenient run turns every rejected row into a [`RowError`]. Callers that
//! want fail-fast behavior afterwards get the full, ordered list back as
//! [`RowErrors`].

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::error::StructuralError;

/// Why a row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowContext {
    /// The row could not be bound (missing required column or conversion failure).
    Structural,
    /// The row was bound but failed one or more field constraints.
    Validation,
}

impl RowContext {
    /// The context tag, `"structural"` or `"validation"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowContext::Structural => "structural",
            RowContext::Validation => "validation",
        }
    }
}

impl Display for RowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The report for one rejected row. Immutable once created.
///
/// # Example
///
/// ```rust
/// use rowbind::{RowContext, RowError};
///
/// let error = RowError::new(2, RowContext::Validation, vec!["Field must not be blank".into()]);
///
/// assert_eq!(error.row_number(), 2);
/// assert_eq!(error.to_string(), "Row 2 (validation): Field must not be blank");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    row_number: u64,
    context: RowContext,
    errors: Vec<String>,
}

impl RowError {
    /// Creates a row report. `row_number` is 1-based and counts data rows only.
    pub fn new(row_number: u64, context: RowContext, errors: Vec<String>) -> Self {
        Self {
            row_number,
            context,
            errors,
        }
    }

    /// Builds a structural report from a binding failure.
    pub fn structural(error: &StructuralError) -> Self {
        Self::new(error.row(), RowContext::Structural, vec![error.to_string()])
    }

    pub fn row_number(&self) -> u64 {
        self.row_number
    }

    pub fn context(&self) -> RowContext {
        self.context
    }

    /// The collected messages, in validation order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {} ({}): {}",
            self.row_number,
            self.context,
            self.errors.join(", ")
        )
    }
}

/// A non-empty, ordered collection of row reports.
///
/// Returned by [`ParseResult::raise_if_errors`](crate::ParseResult::raise_if_errors).
/// Implements `Semigroup`, so the reports of several runs can be combined:
///
/// ```rust
/// use rowbind::{RowContext, RowError, RowErrors};
/// use stillwater::prelude::*;
///
/// let first = RowErrors::single(RowError::new(1, RowContext::Structural, vec!["missing".into()]));
/// let second = RowErrors::single(RowError::new(4, RowContext::Validation, vec!["blank".into()]));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowErrors(NonEmptyVec<RowError>);

impl RowErrors {
    /// Creates a `RowErrors` containing a single report.
    pub fn single(error: RowError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `RowErrors` from a `Vec<RowError>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<RowError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("RowErrors requires at least one error"))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowError> {
        self.0.iter()
    }

    /// The first rejected row.
    pub fn first(&self) -> &RowError {
        self.0.head()
    }

    /// Reports with the given context tag.
    pub fn with_context(&self, context: RowContext) -> Vec<&RowError> {
        self.0.iter().filter(|e| e.context == context).collect()
    }

    pub fn into_vec(self) -> Vec<RowError> {
        self.0.into_vec()
    }
}

impl Semigroup for RowErrors {
    fn combine(self, other: Self) -> Self {
        RowErrors(self.0.combine(other.0))
    }
}

impl Display for RowErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parsing failed with {} row error(s):", self.len())?;
        for error in self.iter() {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for RowErrors {}

impl IntoIterator for RowErrors {
    type Item = RowError;
    type IntoIter = std::vec::IntoIter<RowError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
