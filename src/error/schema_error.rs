//! Schema registration errors.

use crate::value::TargetType;

/// Errors raised while registering or building a schema.
///
/// These always indicate a mistake in the declarative field definitions and
/// are surfaced at registration time, before any row is read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A field definition has an empty (or all-whitespace) column name.
    #[error("schema '{record}': field '{field}' has an empty column name")]
    EmptyColumnName { record: String, field: String },

    /// Two field definitions map to the same column.
    #[error("schema '{record}': column '{column}' is mapped more than once")]
    DuplicateColumn { record: String, column: String },

    /// A declared type name is not one of the supported target types.
    #[error("unsupported target type '{0}'")]
    UnsupportedType(String),

    /// A declared type name disagrees with the field's Rust type.
    #[error("column '{column}': declared type {declared} does not match field type {actual}")]
    DeclaredTypeMismatch {
        column: String,
        declared: TargetType,
        actual: TargetType,
    },

    /// A date format pattern could not be compiled.
    #[error("invalid date pattern '{pattern}': {reason}")]
    InvalidDatePattern { pattern: String, reason: String },

    /// A format hint was attached to a field that does not use one.
    #[error("column '{column}': format hint is only valid for date fields, not {target}")]
    FormatHintNotApplicable { column: String, target: TargetType },

    /// A validator was attached to a field of a type it cannot check.
    #[error("column '{column}': {validator} validator cannot check {target} values")]
    ValidatorNotApplicable {
        column: String,
        validator: &'static str,
        target: TargetType,
    },

    /// The record type already has a registered schema.
    #[error("schema for '{0}' already registered")]
    AlreadyRegistered(String),
}

// Schema errors are returned from registries shared across threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaError>();
    assert_sync::<SchemaError>();
};
