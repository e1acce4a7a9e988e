//! Typed cell values and the bridge between Rust field types and target types.
//!
//! A raw cell is converted into a [`Value`] according to a [`TargetType`].
//! Record fields are plain Rust types; [`FieldType`] connects each supported
//! Rust type to its target type and moves values in and out of [`Value`].

use std::fmt::{self, Display};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::error::SchemaError;

/// The set of types a raw cell can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// UTF-8 text, kept as trimmed.
    Text,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Double-precision float.
    Float64,
    /// Arbitrary-precision decimal.
    Decimal,
    /// `true` / `false`, case-insensitive.
    Boolean,
    /// Calendar date without time zone.
    Date,
}

impl TargetType {
    /// Canonical name used in messages and declarative definitions.
    pub fn name(&self) -> &'static str {
        match self {
            TargetType::Text => "text",
            TargetType::Int32 => "int32",
            TargetType::Int64 => "int64",
            TargetType::Float64 => "float64",
            TargetType::Decimal => "decimal",
            TargetType::Boolean => "boolean",
            TargetType::Date => "date",
        }
    }

    /// Returns true for types numeric validators can compare.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TargetType::Int32 | TargetType::Int64 | TargetType::Float64 | TargetType::Decimal
        )
    }
}

impl Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetType {
    type Err = SchemaError;

    /// Parses a declared type name. Common aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let target = match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "str" => TargetType::Text,
            "int32" | "i32" | "int" | "integer" => TargetType::Int32,
            "int64" | "i64" | "long" => TargetType::Int64,
            "float64" | "f64" | "double" => TargetType::Float64,
            "decimal" | "bigdecimal" => TargetType::Decimal,
            "boolean" | "bool" => TargetType::Boolean,
            "date" | "localdate" => TargetType::Date,
            _ => return Err(SchemaError::UnsupportedType(s.to_string())),
        };
        Ok(target)
    }
}

/// A converted cell value.
///
/// Absence is modelled as `Option<Value>::None`, never as a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Decimal(BigDecimal),
    Boolean(bool),
    Date(NaiveDate),
}

impl Value {
    /// The target type this value belongs to.
    pub fn target_type(&self) -> TargetType {
        match self {
            Value::Text(_) => TargetType::Text,
            Value::Int32(_) => TargetType::Int32,
            Value::Int64(_) => TargetType::Int64,
            Value::Float64(_) => TargetType::Float64,
            Value::Decimal(_) => TargetType::Decimal,
            Value::Boolean(_) => TargetType::Boolean,
            Value::Date(_) => TargetType::Date,
        }
    }

    /// Returns the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int32(n) => write!(f, "{}", n),
            Value::Int64(n) => write!(f, "{}", n),
            Value::Float64(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

/// A Rust type that can back a record field.
///
/// Implemented for every supported target type. A record field of type
/// `Option<F>` where `F: FieldType` can be bound to a column.
pub trait FieldType: Clone + Send + Sync + 'static {
    /// The target type raw cells are converted into for this field.
    const TARGET: TargetType;

    /// Extracts a field value from a converted value of the matching target type.
    ///
    /// Returns `None` when the value has a different target type.
    fn from_value(value: Value) -> Option<Self>;

    /// Wraps the field value for validation.
    fn to_value(&self) -> Value;
}

macro_rules! field_type {
    ($ty:ty, $variant:ident) => {
        impl FieldType for $ty {
            const TARGET: TargetType = TargetType::$variant;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }
        }
    };
}

field_type!(String, Text);
field_type!(i32, Int32);
field_type!(i64, Int64);
field_type!(f64, Float64);
field_type!(BigDecimal, Decimal);
field_type!(bool, Boolean);
field_type!(NaiveDate, Date);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_from_name() {
        assert_eq!("int64".parse::<TargetType>().unwrap(), TargetType::Int64);
        assert_eq!("Long".parse::<TargetType>().unwrap(), TargetType::Int64);
        assert_eq!("LocalDate".parse::<TargetType>().unwrap(), TargetType::Date);
        assert_eq!("string".parse::<TargetType>().unwrap(), TargetType::Text);
    }

    #[test]
    fn test_target_type_unknown_name() {
        let err = "uuid".parse::<TargetType>().unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedType(ref name) if name == "uuid"));
    }

    #[test]
    fn test_is_numeric() {
        assert!(TargetType::Int32.is_numeric());
        assert!(TargetType::Decimal.is_numeric());
        assert!(!TargetType::Text.is_numeric());
        assert!(!TargetType::Date.is_numeric());
    }

    #[test]
    fn test_field_type_round_trip_rejects_other_variants() {
        assert_eq!(i32::from_value(Value::Int32(7)), Some(7));
        assert_eq!(i32::from_value(Value::Int64(7)), None);
        assert_eq!(String::from_value(Value::Boolean(true)), None);
        assert_eq!(true.to_value(), Value::Boolean(true));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("SG18".to_string()).to_string(), "SG18");
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2024-01-15");
    }
}
