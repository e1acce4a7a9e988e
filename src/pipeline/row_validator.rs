//! Validating bound records.

use crate::error::FieldViolation;
use crate::row::Row;
use crate::schema::SchemaDescriptor;
use crate::validation::ValidationOutcome;

/// Runs every field's validators against a bound record.
pub struct RowValidator<'s, T> {
    schema: &'s SchemaDescriptor<T>,
}

impl<'s, T> RowValidator<'s, T> {
    pub fn new(schema: &'s SchemaDescriptor<T>) -> Self {
        Self { schema }
    }

    /// Validates `record`, merging outcomes field by field in declaration
    /// order, validator by validator.
    ///
    /// An optional field whose column is absent from `row` contributes no
    /// errors: its rules only apply to values that were actually supplied.
    pub fn validate<R: Row + ?Sized>(&self, record: &T, row: &R) -> ValidationOutcome {
        self.violations(record, row)
            .into_iter()
            .map(|violation| ValidationOutcome::error(violation.message))
            .collect()
    }

    /// Like [`validate`](Self::validate), keeping the column of each message.
    pub fn violations<R: Row + ?Sized>(&self, record: &T, row: &R) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for field in self.schema.fields() {
            if !field.is_required() && !row.contains(field.column()) {
                tracing::trace!(
                    row = row.row_number(),
                    column = field.column(),
                    "optional column absent, skipping its validators"
                );
                continue;
            }

            let value = field.read(record);
            for validator in field.validators() {
                violations.extend(
                    validator
                        .validate(value.as_ref())
                        .into_errors()
                        .into_iter()
                        .map(|message| FieldViolation::new(field.column(), message)),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;
    use crate::row::RawRow;
    use crate::schema::SchemaBuilder;
    use crate::validator::Validator;

    #[derive(Debug, Default)]
    struct Wafer {
        fab: Option<String>,
        vendor_code: Option<String>,
        yield_pct: Option<f64>,
    }

    fn schema() -> SchemaDescriptor<Wafer> {
        SchemaBuilder::new()
            .field(field!(Wafer, "fab" => fab))
            .field(
                field!(Wafer, "vendor_code" => vendor_code)
                    .not_blank()
                    .validator(Validator::predicate("must start with VC", |v| {
                        v.and_then(|v| v.as_text()).is_some_and(|s| s.starts_with("VC"))
                    })),
            )
            .field(field!(Wafer, "yield" => yield_pct).min(0).max(100))
            .build()
            .unwrap()
    }

    #[test]
    fn test_absent_optional_column_is_suppressed() {
        let schema = schema();
        let row = RawRow::new(1, [("fab", "SG18")]);
        let wafer = Wafer {
            fab: Some("SG18".to_string()),
            ..Wafer::default()
        };

        assert!(RowValidator::new(&schema).validate(&wafer, &row).is_valid());
    }

    #[test]
    fn test_present_blank_column_fails() {
        let schema = schema();
        let row = RawRow::new(2, [("fab", "SG18"), ("vendor_code", "")]);
        let wafer = Wafer {
            fab: Some("SG18".to_string()),
            ..Wafer::default()
        };

        let outcome = RowValidator::new(&schema).validate(&wafer, &row);
        assert_eq!(
            outcome.errors(),
            ["Field must not be blank", "must start with VC"]
        );
    }

    #[test]
    fn test_errors_merge_in_declaration_order() {
        let schema = schema();
        let row = RawRow::new(3, [("vendor_code", "XX1"), ("yield", "140")]);
        let wafer = Wafer {
            fab: None,
            vendor_code: Some("XX1".to_string()),
            yield_pct: Some(140.0),
        };

        let outcome = RowValidator::new(&schema).validate(&wafer, &row);
        assert_eq!(
            outcome.errors(),
            ["must start with VC", "Value must be less than or equal to 100"]
        );
    }

    #[test]
    fn test_violations_name_their_column() {
        let schema = schema();
        let row = RawRow::new(3, [("vendor_code", "XX1"), ("yield", "140")]);
        let wafer = Wafer {
            fab: None,
            vendor_code: Some("XX1".to_string()),
            yield_pct: Some(140.0),
        };

        let violations = RowValidator::new(&schema).violations(&wafer, &row);
        assert_eq!(
            violations,
            vec![
                FieldViolation::new("vendor_code", "must start with VC"),
                FieldViolation::new("yield", "Value must be less than or equal to 100"),
            ]
        );
    }

    #[test]
    fn test_required_field_rules_always_run() {
        #[derive(Default)]
        struct Named {
            name: Option<String>,
        }

        let schema = SchemaBuilder::<Named>::new()
            .field(field!(Named, "name" => name).required().not_blank())
            .build()
            .unwrap();
        let row = RawRow::new(1, [("name", " ")]);

        let outcome = RowValidator::new(&schema).validate(&Named::default(), &row);
        assert!(!outcome.is_valid());
    }
}
