use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Top-level element kinds found in an OSM XML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A point with coordinates and metadata.
    Node,
    /// An ordered list of node references (e.g., a road) with metadata.
    Way,
    /// A grouping of other elements; carried in the model so readers can
    /// name it, but never shaped.
    Relation,
}

impl ElementKind {
    /// Returns the tag name as it appears in the source document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "node" => Ok(ElementKind::Node),
            "way" => Ok(ElementKind::Way),
            "relation" => Ok(ElementKind::Relation),
            _ => Err(format!("Unknown element kind: {}", s)),
        }
    }
}

/// A key/value annotation attached to a node or way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub key: String,
    pub value: String,
}

/// One hierarchical unit from the source document, owned by the reader
/// until handed to the shaper and dropped after one shaping pass.
///
/// Attributes are the flat `id`/`lat`/`lon`/author-metadata set from the
/// element tag itself; `tags` and `node_refs` preserve child order as it
/// appears in the document. `node_refs` is populated for ways only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement {
    pub kind: ElementKind,
    pub attributes: BTreeMap<String, String>,
    pub tags: Vec<RawTag>,
    pub node_refs: Vec<String>,
}

impl RawElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            tags: Vec::new(),
            node_refs: Vec::new(),
        }
    }

    /// Look up a top-level attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The element identifier, if present. Used for error reporting;
    /// shaping enforces its presence separately.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [ElementKind::Node, ElementKind::Way, ElementKind::Relation] {
            assert_eq!(kind.as_str().parse::<ElementKind>().unwrap(), kind);
        }
        assert!("bounds".parse::<ElementKind>().is_err());
    }

    #[test]
    fn attribute_lookup() {
        let mut element = RawElement::new(ElementKind::Node);
        element
            .attributes
            .insert("id".to_string(), "42".to_string());
        assert_eq!(element.id(), Some("42"));
        assert_eq!(element.attribute("lat"), None);
    }
}
