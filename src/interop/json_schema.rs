//! JSON Schema export.
//!
//! A record schema is described as a draft 2020-12 object schema: one property
//! per column, with its type, format and numeric bounds. Columns are listed in
//! declaration order and required columns end up in `required`.

use serde_json::{json, Map, Value};

use crate::convert::DEFAULT_DATE_PATTERN;
use crate::schema::{FieldDescriptor, SchemaDescriptor};
use crate::validator::Validator;
use crate::value::TargetType;

const DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Trait for converting schema types to JSON Schema format.
///
/// Implementers of this trait can be exported as JSON Schema documents
/// compatible with draft 2020-12.
pub trait ToJsonSchema {
    /// Converts this schema to a JSON Schema representation.
    fn to_json_schema(&self) -> Value;
}

/// Maps a target type to its JSON Schema `type` keyword.
pub fn target_type_to_json_type(target: TargetType) -> &'static str {
    match target {
        TargetType::Text | TargetType::Date => "string",
        TargetType::Int32 | TargetType::Int64 => "integer",
        TargetType::Float64 | TargetType::Decimal => "number",
        TargetType::Boolean => "boolean",
    }
}

impl<T> ToJsonSchema for FieldDescriptor<T> {
    fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert(
            "type".to_string(),
            json!(target_type_to_json_type(self.target())),
        );

        if self.target() == TargetType::Date {
            schema.insert("format".to_string(), json!("date"));
        }
        if let Some(pattern) = self.pattern() {
            if pattern.as_str() != DEFAULT_DATE_PATTERN {
                schema.insert("x-date-pattern".to_string(), json!(pattern.as_str()));
            }
        }

        for validator in self.validators() {
            match validator {
                Validator::NotBlank { .. } => {
                    schema.insert("minLength".to_string(), json!(1));
                }
                Validator::Min { bound, .. } => {
                    schema.insert("minimum".to_string(), json!(bound));
                }
                Validator::Max { bound, .. } => {
                    schema.insert("maximum".to_string(), json!(bound));
                }
                Validator::Email { .. } => {
                    schema.insert("format".to_string(), json!("email"));
                }
                // Custom rules are opaque
                Validator::Custom(_) => {}
            }
        }

        Value::Object(schema)
    }
}

impl<T> ToJsonSchema for SchemaDescriptor<T> {
    fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in self.fields() {
            properties.insert(field.column().to_string(), field.to_json_schema());
        }

        let required: Vec<&str> = self.required_fields().map(|f| f.column()).collect();

        json!({
            "$schema": DRAFT,
            "title": self.record_name(),
            "type": "object",
            "properties": properties,
            "required": required
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;
    use crate::schema::SchemaBuilder;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct Shipment {
        code: Option<String>,
        weight: Option<f64>,
        shipped: Option<NaiveDate>,
    }

    #[test]
    fn test_field_types_and_bounds() {
        let schema = SchemaBuilder::<Shipment>::new()
            .named("Shipment")
            .field(field!(Shipment, "code" => code).required().not_blank())
            .field(field!(Shipment, "weight" => weight).min(0).max(500))
            .field(field!(Shipment, "shipped" => shipped).format("dd/MM/yyyy"))
            .build()
            .unwrap();

        let json = schema.to_json_schema();

        assert_eq!(json["$schema"], DRAFT);
        assert_eq!(json["title"], "Shipment");
        assert_eq!(json["required"], json!(["code"]));
        assert_eq!(json["properties"]["code"]["minLength"], 1);
        assert_eq!(json["properties"]["weight"]["type"], "number");
        assert_eq!(json["properties"]["weight"]["minimum"], 0);
        assert_eq!(json["properties"]["weight"]["maximum"], 500);
        assert_eq!(json["properties"]["shipped"]["format"], "date");
        assert_eq!(json["properties"]["shipped"]["x-date-pattern"], "dd/MM/yyyy");
    }

    #[test]
    fn test_default_date_pattern_is_plain_date() {
        let schema = SchemaBuilder::<Shipment>::new()
            .field(field!(Shipment, "shipped" => shipped))
            .build()
            .unwrap();

        let json = schema.to_json_schema();
        assert_eq!(json["properties"]["shipped"]["format"], "date");
        assert!(json["properties"]["shipped"].get("x-date-pattern").is_none());
    }
}
