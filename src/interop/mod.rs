//! Interoperability with other formats.
//!
//! Schemas export as JSON Schema documents; row reports export as JSON for
//! logs and API responses.

pub mod json_schema;
mod report;

pub use json_schema::ToJsonSchema;
