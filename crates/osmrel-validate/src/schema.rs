//! The declared schema: a static contract per output table.
//!
//! This mirrors the SQL target types the tables are loaded into.
//! Identifiers, references, and positions are integers, coordinates are
//! floats, everything else is text; every field is required.

use std::fmt;

use osmrel_model::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Float,
    Text,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldType::Integer => "an integer",
            FieldType::Float => "a float",
            FieldType::Text => "text",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

const fn field(name: &'static str, field_type: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        field_type,
        required: true,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub table: Table,
    pub fields: &'static [FieldSpec],
}

static NODES: TableSchema = TableSchema {
    table: Table::Nodes,
    fields: &[
        field("id", FieldType::Integer),
        field("lat", FieldType::Float),
        field("lon", FieldType::Float),
        field("user", FieldType::Text),
        field("uid", FieldType::Integer),
        field("version", FieldType::Text),
        field("changeset", FieldType::Integer),
        field("timestamp", FieldType::Text),
    ],
};

static NODE_TAGS: TableSchema = TableSchema {
    table: Table::NodeTags,
    fields: &[
        field("id", FieldType::Integer),
        field("key", FieldType::Text),
        field("value", FieldType::Text),
        field("type", FieldType::Text),
    ],
};

static WAYS: TableSchema = TableSchema {
    table: Table::Ways,
    fields: &[
        field("id", FieldType::Integer),
        field("user", FieldType::Text),
        field("uid", FieldType::Integer),
        field("version", FieldType::Text),
        field("changeset", FieldType::Integer),
        field("timestamp", FieldType::Text),
    ],
};

static WAY_NODES: TableSchema = TableSchema {
    table: Table::WayNodes,
    fields: &[
        field("id", FieldType::Integer),
        field("node_id", FieldType::Integer),
        field("position", FieldType::Integer),
    ],
};

static WAY_TAGS: TableSchema = TableSchema {
    table: Table::WayTags,
    fields: &[
        field("id", FieldType::Integer),
        field("key", FieldType::Text),
        field("value", FieldType::Text),
        field("type", FieldType::Text),
    ],
};

/// The declared schema for one table.
pub fn schema_for(table: Table) -> &'static TableSchema {
    match table {
        Table::Nodes => &NODES,
        Table::NodeTags => &NODE_TAGS,
        Table::Ways => &WAYS,
        Table::WayNodes => &WAY_NODES,
        Table::WayTags => &WAY_TAGS,
    }
}
