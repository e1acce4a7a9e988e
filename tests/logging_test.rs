//! Parsing with a tracing subscriber installed.

use rowbind::{field, ParseOptions, Parser, Record, SchemaBuilder, SchemaRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct Batch {
    lot: Option<String>,
    count: Option<i32>,
}

impl Record for Batch {
    fn schema(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        schema
            .field(field!(Batch, "lot" => lot).required().not_blank())
            .field(field!(Batch, "count" => count).min(1))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("rowbind=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_lenient_run_with_trace_logging() {
    init_tracing();

    let parser = Parser::<Batch>::for_record(&SchemaRegistry::new())
        .unwrap()
        .with_options(ParseOptions::lenient());

    let result = parser.parse_str("lot,count\nL1,3\nL2,0\n,5").unwrap();

    assert_eq!(result.valid_rows().len(), 1);
    assert_eq!(result.row_errors().len(), 2);
}

#[test]
fn test_strict_abort_with_trace_logging() {
    init_tracing();

    let parser = Parser::<Batch>::for_record(&SchemaRegistry::new()).unwrap();
    let err = parser.parse_str("count\n3").unwrap_err();

    assert_eq!(err.row(), Some(1));
    assert_eq!(err.to_string(), "row 1: required field 'lot' is missing");
}
