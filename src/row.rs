//! Tokenized input rows.
//!
//! The pipeline only needs three things from a row: the raw string for a
//! column, whether the column is present at all, and the row's 1-based data
//! index. [`Row`] captures that contract; [`RawRow`] is the implementation
//! produced by [`read_rows`](crate::read_rows).

use indexmap::IndexMap;

/// One tokenized data row.
pub trait Row {
    /// The raw cell for `column`, or `None` if the column is not in this row.
    fn get(&self, column: &str) -> Option<&str>;

    /// Whether the column is present in this row, even if its cell is empty.
    fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// 1-based index among data rows (the header is not counted).
    fn row_number(&self) -> u64;
}

/// A row held in memory as an ordered column-to-cell map.
///
/// # Example
///
/// ```rust
/// use rowbind::{RawRow, Row};
///
/// let row = RawRow::new(2, [("fab", "SG18"), ("vendor_code", "")]);
///
/// assert_eq!(row.get("fab"), Some("SG18"));
/// assert!(row.contains("vendor_code"));
/// assert!(!row.contains("lot"));
/// assert_eq!(row.row_number(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    number: u64,
    cells: IndexMap<String, String>,
}

impl RawRow {
    pub fn new<I, K, V>(number: u64, cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            number,
            cells: cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Column names in input order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Row for RawRow {
    fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    fn row_number(&self) -> u64 {
        self.number
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn get(&self, column: &str) -> Option<&str> {
        (**self).get(column)
    }

    fn contains(&self, column: &str) -> bool {
        (**self).contains(column)
    }

    fn row_number(&self) -> u64 {
        (**self).row_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_keep_input_order() {
        let row = RawRow::new(1, [("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_present_but_empty_cell() {
        let row = RawRow::new(1, [("vendor_code", "")]);
        assert!(row.contains("vendor_code"));
        assert_eq!(row.get("vendor_code"), Some(""));
    }

    #[test]
    fn test_reference_forwards() {
        let row = RawRow::new(7, [("fab", "SG08")]);
        let by_ref: &RawRow = &row;
        assert_eq!(Row::get(&by_ref, "fab"), Some("SG08"));
        assert_eq!(Row::row_number(&by_ref), 7);
    }
}
