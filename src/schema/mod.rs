//! Schema descriptions.
//!
//! A schema maps the columns of a delimited file to the fields of one record
//! type. Each field is declared with a [`FieldDefinition`]: its column, whether
//! the column is required, an optional date pattern and an ordered list of
//! validators. [`SchemaBuilder::build`] checks the definitions once and yields
//! an immutable [`SchemaDescriptor`].
//!
//! Record types usually declare their schema by implementing [`Record`], which
//! lets [`SchemaRegistry`](crate::SchemaRegistry) build and cache it on first use.
//!
//! # Example
//!
//! ```rust
//! use rowbind::{field, Record, SchemaBuilder};
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     name: Option<String>,
//!     job: Option<String>,
//!     age: Option<i32>,
//! }
//!
//! impl Record for Person {
//!     fn schema(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
//!         schema
//!             .field(field!(Person, "name" => name).required().not_blank())
//!             .field(field!(Person, "job" => job).required())
//!             .field(field!(Person, "age" => age).min(18).max(30))
//!     }
//! }
//!
//! let schema = Person::schema(SchemaBuilder::new()).build().unwrap();
//! assert_eq!(schema.len(), 3);
//! ```

mod descriptor;
mod field;

pub use descriptor::{SchemaBuilder, SchemaDescriptor};
pub use field::{FieldDefinition, FieldDescriptor};

/// A record type that rows can be bound to.
///
/// Rows are bound into a fresh `Default` instance. `Send + Sync + 'static`
/// lets the built schema be cached and shared across threads.
pub trait Record: Default + Send + Sync + 'static {
    /// Declares the record's fields on the given builder.
    fn schema(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self>;
}
