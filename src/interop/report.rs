//! JSON error reports.

use serde_json::{json, Value};

use crate::error::{RowError, RowErrors};
use crate::result::ParseResult;

impl RowError {
    /// The report as a JSON object:
    /// `{"row": 2, "context": "validation", "errors": [...]}`.
    pub fn to_json(&self) -> Value {
        json!({
            "row": self.row_number(),
            "context": self.context().as_str(),
            "errors": self.errors(),
        })
    }
}

impl RowErrors {
    /// All reports as a JSON array, in row order.
    pub fn to_json(&self) -> Value {
        Value::Array(self.iter().map(RowError::to_json).collect())
    }
}

impl<T> ParseResult<T> {
    /// Summarizes the run for logs or API responses.
    ///
    /// ```rust
    /// use rowbind::{ParseResult, RowContext, RowError};
    ///
    /// let result: ParseResult<()> = ParseResult::new(
    ///     vec![(), ()],
    ///     vec![RowError::new(3, RowContext::Structural, vec!["required field 'job' is missing".into()])],
    /// );
    ///
    /// let report = result.error_report();
    /// assert_eq!(report["valid"], 2);
    /// assert_eq!(report["rejected"], 1);
    /// assert_eq!(report["errors"][0]["row"], 3);
    /// ```
    pub fn error_report(&self) -> Value {
        json!({
            "total": self.total_rows(),
            "valid": self.valid_rows().len(),
            "rejected": self.row_errors().len(),
            "errors": self.row_errors().iter().map(RowError::to_json).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RowContext;

    #[test]
    fn test_row_error_json() {
        let error = RowError::new(
            2,
            RowContext::Validation,
            vec!["Field must not be blank".to_string()],
        );

        assert_eq!(
            error.to_json(),
            json!({
                "row": 2,
                "context": "validation",
                "errors": ["Field must not be blank"]
            })
        );
    }

    #[test]
    fn test_row_errors_json_keeps_order() {
        let errors = RowErrors::from_vec(vec![
            RowError::new(5, RowContext::Structural, vec!["a".to_string()]),
            RowError::new(1, RowContext::Validation, vec!["b".to_string()]),
        ]);

        let json = errors.to_json();
        assert_eq!(json[0]["row"], 5);
        assert_eq!(json[1]["row"], 1);
    }

    #[test]
    fn test_clean_report() {
        let result: ParseResult<u8> = ParseResult::new(vec![1], Vec::new());
        let report = result.error_report();
        assert_eq!(report["total"], 1);
        assert_eq!(report["errors"], json!([]));
    }
}
