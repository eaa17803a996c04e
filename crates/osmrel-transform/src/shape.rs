//! Shaping: one hierarchical element into flat, foreign-keyed rows.
//!
//! Shaping consumes the element, so the raw subtree is released as soon
//! as its rows exist. Every emitted row is a freshly constructed value;
//! rows never share or reuse storage across iterations.

use std::collections::BTreeMap;

use osmrel_model::{
    ElementKind, NodeRow, RawElement, RawTag, ShapedElement, TagRow, WayNodeRow, WayRow,
};

use crate::error::ShapeError;
use crate::normalization::{CorrectionTable, correct_street_suffix, split_namespaced_key};

/// Tag key that denotes the element's street name.
const STREET_NAME_KEY: &str = "addr:street";

/// Shape a node or way into its tabular rows.
///
/// Total over well-formed elements; a missing required attribute is a
/// [`ShapeError::MissingAttribute`] carrying the element's kind and
/// identifier, and a relation is [`ShapeError::UnsupportedKind`].
pub fn shape_element(
    element: RawElement,
    corrections: &CorrectionTable,
) -> Result<ShapedElement, ShapeError> {
    match element.kind {
        ElementKind::Node => shape_node(element, corrections),
        ElementKind::Way => shape_way(element, corrections),
        ElementKind::Relation => Err(ShapeError::UnsupportedKind {
            kind: ElementKind::Relation,
        }),
    }
}

fn shape_node(
    mut element: RawElement,
    corrections: &CorrectionTable,
) -> Result<ShapedElement, ShapeError> {
    let kind = element.kind;
    let display_id = display_id(&element);
    let mut take = |attribute| take_required(&mut element.attributes, kind, &display_id, attribute);

    let row = NodeRow {
        id: take("id")?,
        lat: take("lat")?,
        lon: take("lon")?,
        user: take("user")?,
        uid: take("uid")?,
        version: take("version")?,
        changeset: take("changeset")?,
        timestamp: take("timestamp")?,
    };
    let tags = shape_tags(&row.id, element.tags, corrections);
    Ok(ShapedElement::Node { row, tags })
}

fn shape_way(
    mut element: RawElement,
    corrections: &CorrectionTable,
) -> Result<ShapedElement, ShapeError> {
    let kind = element.kind;
    let display_id = display_id(&element);
    let mut take = |attribute| take_required(&mut element.attributes, kind, &display_id, attribute);

    let row = WayRow {
        id: take("id")?,
        user: take("user")?,
        uid: take("uid")?,
        version: take("version")?,
        changeset: take("changeset")?,
        timestamp: take("timestamp")?,
    };

    let way_nodes = element
        .node_refs
        .into_iter()
        .enumerate()
        .map(|(position, node_id)| WayNodeRow {
            id: row.id.clone(),
            node_id,
            position: position as u64,
        })
        .collect();

    let tags = shape_tags(&row.id, element.tags, corrections);
    Ok(ShapedElement::Way {
        row,
        way_nodes,
        tags,
    })
}

/// One tag row per tag child, street names corrected, keys split, and
/// the owner's identifier stamped as the foreign key.
fn shape_tags(owner_id: &str, tags: Vec<RawTag>, corrections: &CorrectionTable) -> Vec<TagRow> {
    tags.into_iter()
        .map(|tag| {
            let value = if tag.key == STREET_NAME_KEY {
                correct_street_suffix(corrections, &tag.value)
            } else {
                tag.value
            };
            let (tag_type, key) = split_namespaced_key(&tag.key);
            TagRow {
                id: owner_id.to_string(),
                key,
                value,
                tag_type,
            }
        })
        .collect()
}

fn take_required(
    attributes: &mut BTreeMap<String, String>,
    kind: ElementKind,
    display_id: &str,
    attribute: &'static str,
) -> Result<String, ShapeError> {
    attributes
        .remove(attribute)
        .ok_or_else(|| ShapeError::MissingAttribute {
            kind,
            id: display_id.to_string(),
            attribute,
        })
}

/// Identifier for error messages; presence of `id` itself is enforced by
/// the regular required-attribute path.
fn display_id(element: &RawElement) -> String {
    element.id().unwrap_or("(unknown)").to_string()
}
