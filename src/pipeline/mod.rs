//! The binding and validation pipeline.
//!
//! ```text
//! rows -> RowBinder -> (record | StructuralError)
//!      -> RowValidator -> (record | ValidationOutcome errors)
//!      -> ParseOrchestrator -> ParseResult
//! ```

mod binder;
mod orchestrator;
mod row_validator;

pub use binder::RowBinder;
pub use orchestrator::ParseOrchestrator;
pub use row_validator::RowValidator;
