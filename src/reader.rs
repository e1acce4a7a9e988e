//! Delimited-text tokenizing.
//!
//! Reads a header line followed by data rows and materializes every row as a
//! [`RawRow`] before any binding starts. Records shorter than the header
//! leave their trailing columns absent; extra cells beyond the header are
//! dropped. A header that names a column twice is rejected.

use std::io::Read;

use indexmap::IndexSet;

use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::row::RawRow;

/// Tokenizes `input` into rows keyed by the header line.
///
/// # Errors
///
/// Returns `ParseError::InvalidDelimiter` for a non-ASCII delimiter,
/// `ParseError::DuplicateHeader` when a column name repeats, and
/// `ParseError::Tokenize` for malformed or unreadable input.
///
/// # Example
///
/// ```rust
/// use rowbind::{read_rows, ParseOptions, Row};
///
/// let rows = read_rows("fab;lot\nSG18; 7 \n".as_bytes(), &ParseOptions::default().with_delimiter(';')).unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("lot"), Some("7"));
/// assert_eq!(rows[0].row_number(), 1);
/// ```
pub fn read_rows<R: Read>(input: R, options: &ParseOptions) -> Result<Vec<RawRow>, ParseError> {
    let delimiter = delimiter_byte(options.delimiter())?;
    let trim = if options.trim() {
        csv::Trim::All
    } else {
        csv::Trim::None
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(trim)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    check_unique_headers(&headers)?;
    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let number = index as u64 + 1;
        rows.push(RawRow::new(number, headers.iter().zip(record.iter())));
    }

    tracing::trace!(
        columns = headers.len(),
        rows = rows.len(),
        "tokenized delimited input"
    );
    Ok(rows)
}

fn check_unique_headers(headers: &csv::StringRecord) -> Result<(), ParseError> {
    let mut seen = IndexSet::with_capacity(headers.len());
    for header in headers {
        if !seen.insert(header) {
            return Err(ParseError::DuplicateHeader(header.to_string()));
        }
    }
    Ok(())
}

fn delimiter_byte(delimiter: char) -> Result<u8, ParseError> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(ParseError::InvalidDelimiter(delimiter))
    }
}
