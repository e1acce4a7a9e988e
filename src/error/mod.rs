//! Error types for registration, conversion, binding and parsing.
//!
//! - [`SchemaError`]: a bad schema registration. Programmer error, never recovered.
//! - [`ConversionError`]: a raw cell that does not fit its target type.
//! - [`StructuralError`]: a row that cannot be bound (missing required column or
//!   failed conversion).
//! - [`RowError`] / [`RowErrors`]: per-row reports collected by a lenient run.
//! - [`ParseError`]: a failed parse call.

mod parse_error;
mod row_error;
mod schema_error;

pub use parse_error::{ConversionError, FieldViolation, ParseError, StructuralError};
pub use row_error::{RowContext, RowError, RowErrors};
pub use schema_error::SchemaError;
