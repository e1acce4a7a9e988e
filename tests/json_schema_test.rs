use bigdecimal::BigDecimal;
use rowbind::{
    field, ParseOptions, Parser, Record, SchemaBuilder, SchemaRegistry, ToJsonSchema,
};
use serde_json::json;

#[derive(Debug, Default)]
struct Invoice {
    number: Option<i32>,
    customer: Option<String>,
    contact: Option<String>,
    total: Option<BigDecimal>,
    paid: Option<bool>,
}

impl Record for Invoice {
    fn schema(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        schema
            .named("Invoice")
            .field(field!(Invoice, "number" => number).required().min(1))
            .field(field!(Invoice, "customer" => customer).required().not_blank())
            .field(field!(Invoice, "contact" => contact).email())
            .field(field!(Invoice, "total" => total).min(0))
            .field(field!(Invoice, "paid" => paid))
    }
}

#[test]
fn test_record_schema_to_json_schema() {
    let schema = SchemaRegistry::new().schema_for::<Invoice>().unwrap();
    let json_schema = schema.to_json_schema();

    assert_eq!(
        json_schema["$schema"],
        "https://json-schema.org/draft/2020-12/schema"
    );
    assert_eq!(json_schema["type"], "object");
    assert_eq!(json_schema["title"], "Invoice");
    assert_eq!(json_schema["required"], json!(["number", "customer"]));

    let properties = &json_schema["properties"];
    assert_eq!(properties["number"], json!({"type": "integer", "minimum": 1}));
    assert_eq!(properties["customer"], json!({"type": "string", "minLength": 1}));
    assert_eq!(properties["contact"], json!({"type": "string", "format": "email"}));
    assert_eq!(properties["total"], json!({"type": "number", "minimum": 0}));
    assert_eq!(properties["paid"], json!({"type": "boolean"}));
}

#[test]
fn test_properties_follow_declaration_order() {
    let schema = SchemaRegistry::new().schema_for::<Invoice>().unwrap();
    let json_schema = schema.to_json_schema();

    let keys: Vec<_> = json_schema["properties"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["number", "customer", "contact", "total", "paid"]);
}

#[test]
fn test_error_report() {
    let parser = Parser::<Invoice>::for_record(&SchemaRegistry::new())
        .unwrap()
        .with_options(ParseOptions::lenient());

    let result = parser
        .parse_str(
            "number,customer,contact,total,paid\n\
             1,ACME,billing@acme.io,10.50,true\n\
             0,,nobody,12,false\n\
             x,Initech,,5,",
        )
        .unwrap();

    assert_eq!(
        result.error_report(),
        json!({
            "total": 3,
            "valid": 1,
            "rejected": 2,
            "errors": [
                {
                    "row": 2,
                    "context": "validation",
                    "errors": [
                        "Value must be greater than or equal to 1",
                        "Field must not be blank",
                        "Invalid email format"
                    ]
                },
                {
                    "row": 3,
                    "context": "structural",
                    "errors": [
                        "column 'number': failed to convert value 'x' to int32: invalid digit found in string"
                    ]
                }
            ]
        })
    );
}
