//! # Rowbind
//!
//! Binds rows of delimited text to typed records and validates every field
//! against declarative per-field rules.
//!
//! ## Overview
//!
//! A record type declares, once, which column feeds each of its fields, the
//! field's target type and an ordered list of validators. Parsing then runs
//! each row through two stages: binding (cell lookup and type conversion) and
//! validation (every validator of every field, all messages collected). The
//! parse either stops at the first bad row (strict mode) or keeps going and
//! reports each rejected row with its 1-based row number (lenient mode).
//!
//! ## Core Types
//!
//! - [`Record`] / [`SchemaBuilder`]: declare a record's fields
//! - [`SchemaRegistry`]: builds each record's [`SchemaDescriptor`] once and shares it
//! - [`Validator`]: built-in and custom field constraints
//! - [`Parser`]: parses text, readers, files or pre-tokenized [`Row`]s
//! - [`ParseResult`]: valid records plus per-row [`RowError`] reports
//!
//! ## Example
//!
//! ```rust
//! use rowbind::{field, ParseOptions, Parser, Record, RowContext, SchemaBuilder, SchemaRegistry};
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
//! let registry = SchemaRegistry::new();
//! let parser = Parser::<Person>::for_record(&registry)
//!     .unwrap()
//!     .with_options(ParseOptions::lenient());
//!
//! let result = parser
//!     .parse_str("name,job,age\nAda,engineer,25\nBob,,40")
//!     .unwrap();
//!
//! assert_eq!(result.valid_rows().len(), 1);
//! let rejected = &result.row_errors()[0];
//! assert_eq!(rejected.row_number(), 2);
//! assert_eq!(rejected.context(), RowContext::Validation);
//! assert_eq!(rejected.errors(), ["Value must be less than or equal to 30"]);
//! ```

pub mod convert;
pub mod error;
pub mod interop;
pub mod options;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod registry;
pub mod result;
pub mod row;
pub mod schema;
pub mod validation;
pub mod validator;
pub mod value;

pub use convert::{convert, DatePattern, DEFAULT_DATE_PATTERN};
pub use error::{
    ConversionError, FieldViolation, ParseError, RowContext, RowError, RowErrors, SchemaError,
    StructuralError,
};
pub use interop::ToJsonSchema;
pub use options::ParseOptions;
pub use parser::{parse, Parser};
pub use pipeline::{ParseOrchestrator, RowBinder, RowValidator};
pub use reader::read_rows;
pub use registry::SchemaRegistry;
pub use result::{ParseResult, ParseValidation};
pub use row::{RawRow, Row};
pub use schema::{FieldDefinition, FieldDescriptor, Record, SchemaBuilder, SchemaDescriptor};
pub use validation::ValidationOutcome;
pub use validator::{render_message, FieldRule, Predicate, Validator};
pub use value::{FieldType, TargetType, Value};
