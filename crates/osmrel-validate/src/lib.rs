pub mod schema;
pub mod validator;

pub use schema::{FieldSpec, FieldType, TableSchema, schema_for};
pub use validator::{ValidationError, validate_element, validate_row};
