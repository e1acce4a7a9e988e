//! Field definitions and their built descriptors.

use std::fmt;
use std::sync::Arc;

use crate::convert::DatePattern;
use crate::validator::Validator;
use crate::value::{FieldType, TargetType, Value};

type Getter<T> = Arc<dyn Fn(&T) -> Option<Value> + Send + Sync>;
type Setter<T> = Arc<dyn Fn(&mut T, Option<Value>) + Send + Sync>;

/// Declares one column-to-field mapping.
///
/// The target type comes from the field's Rust type (`Option<F>` with
/// `F: FieldType`). Definitions are checked when the schema is built.
///
/// # Example
///
/// ```rust
/// use rowbind::{field, FieldDefinition};
///
/// #[derive(Default)]
/// struct Person {
///     name: Option<String>,
///     age: Option<i32>,
/// }
///
/// let name = field!(Person, "name" => name).required().not_blank();
/// let age = FieldDefinition::new("age", |p: &Person| &p.age, |p: &mut Person| &mut p.age)
///     .min(18)
///     .max(30);
///
/// assert!(name.is_required());
/// assert!(!age.is_required());
/// ```
pub struct FieldDefinition<T> {
    pub(crate) name: String,
    pub(crate) column: String,
    pub(crate) required: bool,
    pub(crate) target: TargetType,
    pub(crate) declared_type: Option<String>,
    pub(crate) format: Option<String>,
    pub(crate) validators: Vec<Validator>,
    pub(crate) get: Getter<T>,
    pub(crate) set: Setter<T>,
}

impl<T: 'static> FieldDefinition<T> {
    /// Maps `column` to the field reached through `get`/`set`.
    ///
    /// The field name defaults to the column name.
    pub fn new<F, G, S>(column: impl Into<String>, get: G, set: S) -> Self
    where
        F: FieldType,
        G: Fn(&T) -> &Option<F> + Send + Sync + 'static,
        S: Fn(&mut T) -> &mut Option<F> + Send + Sync + 'static,
    {
        let column = column.into();
        Self {
            name: column.clone(),
            column,
            required: false,
            target: F::TARGET,
            declared_type: None,
            format: None,
            validators: Vec::new(),
            get: Arc::new(move |record: &T| get(record).as_ref().map(F::to_value)),
            set: Arc::new(move |record: &mut T, value: Option<Value>| {
                *set(record) = value.and_then(F::from_value);
            }),
        }
    }
}

impl<T> FieldDefinition<T> {
    /// Sets the record field name used in messages and schema export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the column as required: rows without it fail to bind.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the column as optional (the default).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Declares the target type by name.
    ///
    /// The name must be a supported type and agree with the field's Rust type;
    /// both are checked when the schema is built.
    pub fn declared_type(mut self, type_name: impl Into<String>) -> Self {
        self.declared_type = Some(type_name.into());
        self
    }

    /// Sets the date pattern for a date field, e.g. `"yyyyMMdd"`.
    pub fn format(mut self, pattern: impl Into<String>) -> Self {
        self.format = Some(pattern.into());
        self
    }

    /// Appends a validator. Validators run in the order they are added.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn not_blank(self) -> Self {
        self.validator(Validator::not_blank())
    }

    pub fn min(self, bound: i64) -> Self {
        self.validator(Validator::min(bound))
    }

    pub fn max(self, bound: i64) -> Self {
        self.validator(Validator::max(bound))
    }

    pub fn email(self) -> Self {
        self.validator(Validator::email())
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Builds a [`FieldDefinition`] for a plain struct field.
///
/// `field!(Person, "job" => job)` maps column `job` to `Person::job`, which
/// must be an `Option<F>` with `F: FieldType`. The field name is taken from
/// the struct field.
#[macro_export]
macro_rules! field {
    ($record:ty, $column:expr => $field:ident) => {
        $crate::FieldDefinition::new(
            $column,
            |record: &$record| &record.$field,
            |record: &mut $record| &mut record.$field,
        )
        .named(stringify!($field))
    };
}

/// One built, immutable field of a schema.
pub struct FieldDescriptor<T> {
    name: String,
    column: String,
    required: bool,
    target: TargetType,
    pattern: Option<DatePattern>,
    validators: Vec<Validator>,
    get: Getter<T>,
    set: Setter<T>,
}

impl<T> FieldDescriptor<T> {
    pub(crate) fn from_definition(
        definition: FieldDefinition<T>,
        pattern: Option<DatePattern>,
    ) -> Self {
        Self {
            name: definition.name,
            column: definition.column,
            required: definition.required,
            target: definition.target,
            pattern,
            validators: definition.validators,
            get: definition.get,
            set: definition.set,
        }
    }

    /// The record field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn target(&self) -> TargetType {
        self.target
    }

    /// The compiled date pattern, if the field declared one.
    pub fn pattern(&self) -> Option<&DatePattern> {
        self.pattern.as_ref()
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Reads the field's current value from a record.
    pub fn read(&self, record: &T) -> Option<Value> {
        (self.get)(record)
    }

    /// Stores a converted value into a record.
    pub fn write(&self, record: &mut T, value: Option<Value>) {
        (self.set)(record, value)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("required", &self.required)
            .field("target", &self.target)
            .field("pattern", &self.pattern)
            .field("validators", &self.validators)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Person {
        name: Option<String>,
        age: Option<i32>,
    }

    #[test]
    fn test_definition_defaults() {
        let def = field!(Person, "full_name" => name);
        assert_eq!(def.column(), "full_name");
        assert_eq!(def.name, "name");
        assert!(!def.is_required());
        assert_eq!(def.target, TargetType::Text);
        assert!(def.validators.is_empty());
    }

    #[test]
    fn test_builder_chain_keeps_validator_order() {
        let def = field!(Person, "age" => age).required().min(18).max(30);
        assert!(def.is_required());
        let kinds: Vec<_> = def.validators.iter().map(Validator::kind).collect();
        assert_eq!(kinds, vec!["min", "max"]);
    }

    #[test]
    fn test_descriptor_reads_and_writes() {
        let descriptor = FieldDescriptor::from_definition(field!(Person, "age" => age), None);
        let mut person = Person::default();

        assert_eq!(descriptor.read(&person), None);
        descriptor.write(&mut person, Some(Value::Int32(25)));
        assert_eq!(person.age, Some(25));
        assert_eq!(descriptor.read(&person), Some(Value::Int32(25)));

        descriptor.write(&mut person, None);
        assert_eq!(person.age, None);
    }

    #[test]
    fn test_write_ignores_mismatched_value() {
        let descriptor = FieldDescriptor::from_definition(field!(Person, "name" => name), None);
        let mut person = Person::default();
        descriptor.write(&mut person, Some(Value::Int32(1)));
        assert_eq!(person.name, None);
    }
}
