//! Binding raw rows to records.

use crate::convert::convert;
use crate::error::StructuralError;
use crate::row::Row;
use crate::schema::SchemaDescriptor;

/// Binds rows to fresh `T` instances according to a schema.
///
/// Binding is all-or-nothing: a missing required column or a cell that fails
/// conversion rejects the whole row, and no partial instance escapes.
pub struct RowBinder<'s, T> {
    schema: &'s SchemaDescriptor<T>,
}

impl<'s, T: Default> RowBinder<'s, T> {
    pub fn new(schema: &'s SchemaDescriptor<T>) -> Self {
        Self { schema }
    }

    /// Binds one row, visiting fields in declaration order.
    ///
    /// Present columns are converted and stored. Absent optional columns leave
    /// the field at its default. The first absent required column or failed
    /// conversion stops binding.
    pub fn bind<R: Row + ?Sized>(&self, row: &R) -> Result<T, StructuralError> {
        let mut record = T::default();

        for field in self.schema.fields() {
            match row.get(field.column()) {
                Some(raw) => {
                    let value = convert(raw, field.target(), field.pattern()).map_err(|source| {
                        StructuralError::Conversion {
                            column: field.column().to_string(),
                            row: row.row_number(),
                            source,
                        }
                    })?;
                    field.write(&mut record, value);
                }
                None if field.is_required() => {
                    return Err(StructuralError::MissingColumn {
                        column: field.column().to_string(),
                        row: row.row_number(),
                    });
                }
                None => {}
            }
        }

        Ok(record)
    }
}
