//! Flat row values emitted by shaping.
//!
//! Every row is a freshly constructed immutable value; nothing here is
//! reused across elements. Field values are carried verbatim as strings
//! from the source attributes: type coercion is the relational loader's
//! job, and the schema validator checks coercibility without changing the
//! written bytes.

use crate::ElementKind;

/// Sentinel `type` for tag keys with no namespace prefix.
pub const DEFAULT_TAG_TYPE: &str = "regular";

/// One row of the `nodes` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub id: String,
    pub lat: String,
    pub lon: String,
    pub user: String,
    pub uid: String,
    pub version: String,
    pub changeset: String,
    pub timestamp: String,
}

impl NodeRow {
    pub const COLUMNS: [&'static str; 8] = [
        "id",
        "lat",
        "lon",
        "user",
        "uid",
        "version",
        "changeset",
        "timestamp",
    ];

    /// Field values in declared column order.
    pub fn record(&self) -> [&str; 8] {
        [
            &self.id,
            &self.lat,
            &self.lon,
            &self.user,
            &self.uid,
            &self.version,
            &self.changeset,
            &self.timestamp,
        ]
    }
}

/// One row of the `ways` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WayRow {
    pub id: String,
    pub user: String,
    pub uid: String,
    pub version: String,
    pub changeset: String,
    pub timestamp: String,
}

impl WayRow {
    pub const COLUMNS: [&'static str; 6] =
        ["id", "user", "uid", "version", "changeset", "timestamp"];

    pub fn record(&self) -> [&str; 6] {
        [
            &self.id,
            &self.user,
            &self.uid,
            &self.version,
            &self.changeset,
            &self.timestamp,
        ]
    }
}

/// One row of `node_tags` or `way_tags`.
///
/// `tag_type` (written to the `type` column) is the namespace prefix of
/// the original key, or [`DEFAULT_TAG_TYPE`] when the key carries none.
/// When `tag_type` is not the sentinel, `tag_type:key` reproduces the raw
/// source key exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRow {
    pub id: String,
    pub key: String,
    pub value: String,
    pub tag_type: String,
}

impl TagRow {
    pub const COLUMNS: [&'static str; 4] = ["id", "key", "value", "type"];

    pub fn record(&self) -> [&str; 4] {
        [&self.id, &self.key, &self.value, &self.tag_type]
    }
}

/// One row of `way_nodes`: a single node membership of a way.
///
/// `position` is zero-based, gap-free and strictly increasing in source
/// reference order; it is what lets the way's geometry be reconstructed
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WayNodeRow {
    pub id: String,
    pub node_id: String,
    pub position: u64,
}

impl WayNodeRow {
    pub const COLUMNS: [&'static str; 3] = ["id", "node_id", "position"];

    pub fn record(&self) -> [String; 3] {
        [
            self.id.clone(),
            self.node_id.clone(),
            self.position.to_string(),
        ]
    }
}

/// The target-agnostic output of shaping one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedElement {
    Node {
        row: NodeRow,
        tags: Vec<TagRow>,
    },
    Way {
        row: WayRow,
        way_nodes: Vec<WayNodeRow>,
        tags: Vec<TagRow>,
    },
}

impl ShapedElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            ShapedElement::Node { .. } => ElementKind::Node,
            ShapedElement::Way { .. } => ElementKind::Way,
        }
    }

    /// Identifier of the primary row, which every secondary row of this
    /// element references as its foreign key.
    pub fn id(&self) -> &str {
        match self {
            ShapedElement::Node { row, .. } => &row.id,
            ShapedElement::Way { row, .. } => &row.id,
        }
    }

    /// Total number of rows this element contributes across all tables.
    pub fn row_count(&self) -> usize {
        match self {
            ShapedElement::Node { tags, .. } => 1 + tags.len(),
            ShapedElement::Way {
                way_nodes, tags, ..
            } => 1 + way_nodes.len() + tags.len(),
        }
    }
}
