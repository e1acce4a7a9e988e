//! Entry points for parsing delimited text into records.
//!
//! [`parse`] runs the pipeline over already tokenized rows. [`Parser`] wraps a
//! shared schema and a set of [`ParseOptions`] and adds the text, reader and
//! file entry points, which tokenize the whole input before binding starts.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{ParseError, SchemaError};
use crate::options::ParseOptions;
use crate::pipeline::ParseOrchestrator;
use crate::reader::read_rows;
use crate::registry::SchemaRegistry;
use crate::result::ParseResult;
use crate::row::Row;
use crate::schema::{Record, SchemaDescriptor};

/// Binds and validates `rows` against `schema`.
///
/// Only the strict flag of `options` applies here; delimiter and trimming
/// concern tokenizing, which has already happened.
///
/// # Errors
///
/// In strict mode, the first failing row aborts the run with a
/// [`ParseError`] naming that row.
pub fn parse<T, I>(
    schema: &SchemaDescriptor<T>,
    rows: I,
    options: &ParseOptions,
) -> Result<ParseResult<T>, ParseError>
where
    T: Default,
    I: IntoIterator,
    I::Item: Row,
{
    ParseOrchestrator::new(schema, options.is_strict()).run(rows)
}

/// A reusable parser for one record type.
///
/// # Example
///
/// ```rust
/// use rowbind::{field, ParseOptions, Parser, Record, SchemaBuilder, SchemaRegistry};
///
/// #[derive(Debug, Default)]
/// struct Wafer {
///     fab: Option<String>,
///     vendor_code: Option<String>,
/// }
///
/// impl Record for Wafer {
///     fn schema(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
///         schema
///             .field(field!(Wafer, "fab" => fab))
///             .field(field!(Wafer, "vendor_code" => vendor_code).not_blank())
///     }
/// }
///
/// let registry = SchemaRegistry::new();
/// let parser = Parser::<Wafer>::for_record(&registry)
///     .unwrap()
///     .with_options(ParseOptions::lenient());
///
/// let result = parser.parse_str("fab,vendor_code\nSG08,123456\nSG18,").unwrap();
///
/// assert_eq!(result.valid_rows().len(), 1);
/// assert_eq!(result.row_errors()[0].row_number(), 2);
/// ```
pub struct Parser<T> {
    schema: Arc<SchemaDescriptor<T>>,
    options: ParseOptions,
}

impl<T: Default> Parser<T> {
    /// Creates a parser with default (strict) options.
    pub fn new(schema: Arc<SchemaDescriptor<T>>) -> Self {
        Self {
            schema,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn schema(&self) -> &SchemaDescriptor<T> {
        &self.schema
    }

    /// Parses pre-tokenized rows.
    pub fn parse_rows<I>(&self, rows: I) -> Result<ParseResult<T>, ParseError>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        parse(&self.schema, rows, &self.options)
    }

    /// Parses delimited text with a header line.
    pub fn parse_str(&self, input: &str) -> Result<ParseResult<T>, ParseError> {
        self.parse_reader(input.as_bytes())
    }

    /// Reads the whole input, then parses it.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParseResult<T>, ParseError> {
        let rows = read_rows(reader, &self.options)?;
        self.parse_rows(rows)
    }

    /// Reads a UTF-8 file, then parses it.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<ParseResult<T>, ParseError> {
        let file = File::open(path.as_ref())?;
        self.parse_reader(file)
    }
}

impl<T: Record> Parser<T> {
    /// Creates a parser for a [`Record`] type, building its schema in
    /// `registry` on first use.
    pub fn for_record(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        Ok(Self::new(registry.schema_for::<T>()?))
    }
}

impl<T: Default + Send> Parser<T> {
    /// Parses independent row batches concurrently.
    ///
    /// Each batch is its own parse call with its own result; rows inside a
    /// batch are still processed one at a time, in order. Results come back
    /// in batch order. In strict mode a failing batch does not affect the
    /// others.
    pub fn parse_batches<R>(&self, batches: &[Vec<R>]) -> Vec<Result<ParseResult<T>, ParseError>>
    where
        R: Row + Sync,
    {
        batches
            .par_iter()
            .map(|batch| self.parse_rows(batch))
            .collect()
    }
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            options: self.options,
        }
    }
}
