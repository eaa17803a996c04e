//! Row validation against the declared schema.
//!
//! Invoked per shaped element when the pipeline's validation toggle is
//! on. Fails fast: the first violating field aborts the run, on the
//! premise that a schema violation is a normalization bug to fix, not
//! data to skip.

use osmrel_model::{ShapedElement, Table};
use thiserror::Error;

use crate::schema::{FieldType, schema_for};

/// A shaped row broke the declared contract for its table.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{table}.{field} is required but empty")]
    MissingField { table: Table, field: &'static str },
    #[error("{table}.{field} expects {expected} but got {value:?}")]
    TypeMismatch {
        table: Table,
        field: &'static str,
        expected: FieldType,
        value: String,
    },
}

/// Check every row of one shaped element.
pub fn validate_element(shaped: &ShapedElement) -> Result<(), ValidationError> {
    match shaped {
        ShapedElement::Node { row, tags } => {
            validate_row(Table::Nodes, &row.record())?;
            for tag in tags {
                validate_row(Table::NodeTags, &tag.record())?;
            }
        }
        ShapedElement::Way {
            row,
            way_nodes,
            tags,
        } => {
            validate_row(Table::Ways, &row.record())?;
            for way_node in way_nodes {
                let record = way_node.record();
                let values: Vec<&str> = record.iter().map(String::as_str).collect();
                validate_row(Table::WayNodes, &values)?;
            }
            for tag in tags {
                validate_row(Table::WayTags, &tag.record())?;
            }
        }
    }
    Ok(())
}

/// Check one record, in declared column order, against its table schema.
pub fn validate_row(table: Table, values: &[&str]) -> Result<(), ValidationError> {
    let schema = schema_for(table);
    debug_assert_eq!(schema.fields.len(), values.len());

    for (spec, value) in schema.fields.iter().zip(values) {
        if value.is_empty() {
            if spec.required {
                return Err(ValidationError::MissingField {
                    table,
                    field: spec.name,
                });
            }
            continue;
        }
        let coercible = match spec.field_type {
            FieldType::Integer => value.parse::<i64>().is_ok(),
            FieldType::Float => value.parse::<f64>().is_ok(),
            FieldType::Text => true,
        };
        if !coercible {
            return Err(ValidationError::TypeMismatch {
                table,
                field: spec.name,
                expected: spec.field_type,
                value: (*value).to_string(),
            });
        }
    }
    Ok(())
}
