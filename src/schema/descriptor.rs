//! Schema building and the immutable [`SchemaDescriptor`].

use std::any::type_name;
use std::fmt;

use indexmap::IndexMap;

use crate::convert::DatePattern;
use crate::error::SchemaError;
use crate::value::TargetType;

use super::field::{FieldDefinition, FieldDescriptor};

/// Collects field definitions for one record type.
///
/// # Example
///
/// ```rust
/// use rowbind::{field, SchemaBuilder};
///
/// #[derive(Default)]
/// struct Wafer {
///     fab: Option<String>,
///     vendor_code: Option<String>,
/// }
///
/// let schema = SchemaBuilder::<Wafer>::new()
///     .field(field!(Wafer, "fab" => fab))
///     .field(field!(Wafer, "vendor_code" => vendor_code).not_blank())
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.columns().collect::<Vec<_>>(), vec!["fab", "vendor_code"]);
/// ```
pub struct SchemaBuilder<T> {
    record: String,
    fields: Vec<FieldDefinition<T>>,
}

impl<T> SchemaBuilder<T> {
    /// Creates an empty builder named after the record type.
    pub fn new() -> Self {
        Self {
            record: short_type_name::<T>().to_string(),
            fields: Vec::new(),
        }
    }

    /// Overrides the record name used in messages and schema export.
    pub fn named(mut self, record: impl Into<String>) -> Self {
        self.record = record.into();
        self
    }

    /// Appends a field. Declaration order is validation order.
    pub fn field(mut self, definition: FieldDefinition<T>) -> Self {
        self.fields.push(definition);
        self
    }

    /// Checks every definition and builds the descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, in declaration order: an
    /// empty or duplicate column, an unknown or mismatched declared type, a
    /// format hint on a non-date field, an invalid date pattern, or a
    /// validator that cannot check the field's type.
    pub fn build(self) -> Result<SchemaDescriptor<T>, SchemaError> {
        let mut fields = IndexMap::with_capacity(self.fields.len());

        for definition in self.fields {
            let column = definition.column.trim();
            if column.is_empty() {
                return Err(SchemaError::EmptyColumnName {
                    record: self.record,
                    field: definition.name,
                });
            }
            if fields.contains_key(column) {
                return Err(SchemaError::DuplicateColumn {
                    record: self.record,
                    column: column.to_string(),
                });
            }

            if let Some(declared) = &definition.declared_type {
                let declared: TargetType = declared.parse()?;
                if declared != definition.target {
                    return Err(SchemaError::DeclaredTypeMismatch {
                        column: column.to_string(),
                        declared,
                        actual: definition.target,
                    });
                }
            }

            let pattern = match &definition.format {
                Some(_) if definition.target != TargetType::Date => {
                    return Err(SchemaError::FormatHintNotApplicable {
                        column: column.to_string(),
                        target: definition.target,
                    });
                }
                Some(format) => Some(DatePattern::parse(format)?),
                None => None,
            };

            if let Some(validator) = definition
                .validators
                .iter()
                .find(|v| !v.applies_to(definition.target))
            {
                return Err(SchemaError::ValidatorNotApplicable {
                    column: column.to_string(),
                    validator: validator.kind(),
                    target: definition.target,
                });
            }

            let column = column.to_string();
            let mut definition = definition;
            definition.column = column.clone();
            fields.insert(column, FieldDescriptor::from_definition(definition, pattern));
        }

        Ok(SchemaDescriptor {
            record: self.record,
            fields,
        })
    }
}

impl<T> Default for SchemaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The built schema of one record type.
///
/// Immutable once built; parse runs share it read-only, usually through the
/// `Arc` handed out by [`SchemaRegistry`](crate::SchemaRegistry).
pub struct SchemaDescriptor<T> {
    record: String,
    fields: IndexMap<String, FieldDescriptor<T>>,
}

impl<T> SchemaDescriptor<T> {
    /// Starts a builder for this record type.
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder::new()
    }

    /// The record name.
    pub fn record_name(&self) -> &str {
        &self.record
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.values()
    }

    /// Looks up a field by column name.
    pub fn field(&self, column: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.get(column)
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Required fields in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields().filter(|f| f.is_required())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for SchemaDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaDescriptor")
            .field("record", &self.record)
            .field("fields", &self.fields.values().collect::<Vec<_>>())
            .finish()
    }
}

/// `type_name` without the module path, e.g. `Wafer` for `app::dto::Wafer`.
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
