//! Shaping semantics: primary rows, tag rows, way-node ordering,
//! required-attribute enforcement.

use osmrel_model::{ElementKind, RawElement, RawTag, ShapedElement};
use osmrel_transform::{CorrectionTable, ShapeError, shape_element};

fn element(kind: ElementKind, attributes: &[(&str, &str)]) -> RawElement {
    let mut element = RawElement::new(kind);
    for (key, value) in attributes {
        element
            .attributes
            .insert((*key).to_string(), (*value).to_string());
    }
    element
}

fn node_55() -> RawElement {
    element(
        ElementKind::Node,
        &[
            ("id", "55"),
            ("lat", "42.36"),
            ("lon", "-71.09"),
            ("user", "mapper"),
            ("uid", "7"),
            ("version", "2"),
            ("changeset", "11"),
            ("timestamp", "2017-01-01T00:00:00Z"),
        ],
    )
}

fn way_101() -> RawElement {
    element(
        ElementKind::Way,
        &[
            ("id", "101"),
            ("user", "mapper"),
            ("uid", "7"),
            ("version", "3"),
            ("changeset", "13"),
            ("timestamp", "2017-01-03T00:00:00Z"),
        ],
    )
}

#[test]
fn node_attributes_are_copied_verbatim() {
    let shaped = shape_element(node_55(), &CorrectionTable::default()).expect("shape");
    let ShapedElement::Node { row, tags } = shaped else {
        panic!("expected a node");
    };
    assert_eq!(row.id, "55");
    assert_eq!(row.lat, "42.36");
    assert_eq!(row.timestamp, "2017-01-01T00:00:00Z");
    assert!(tags.is_empty());
}

#[test]
fn tag_rows_carry_the_owner_id_and_split_keys() {
    let mut raw = node_55();
    raw.tags.push(RawTag {
        key: "addr:street".to_string(),
        value: "Main St".to_string(),
    });
    raw.tags.push(RawTag {
        key: "amenity".to_string(),
        value: "cafe".to_string(),
    });
    raw.tags.push(RawTag {
        key: "gnis:county:name".to_string(),
        value: "Suffolk".to_string(),
    });

    let shaped = shape_element(raw, &CorrectionTable::default()).expect("shape");
    let ShapedElement::Node { tags, .. } = shaped else {
        panic!("expected a node");
    };

    assert_eq!(tags.len(), 3);
    for tag in &tags {
        assert_eq!(tag.id, "55");
    }

    assert_eq!(tags[0].tag_type, "addr");
    assert_eq!(tags[0].key, "street");
    assert_eq!(tags[0].value, "Main Street");

    assert_eq!(tags[1].tag_type, "regular");
    assert_eq!(tags[1].key, "amenity");
    assert_eq!(tags[1].value, "cafe");

    assert_eq!(tags[2].tag_type, "gnis");
    assert_eq!(tags[2].key, "county:name");
}

#[test]
fn street_correction_applies_only_to_street_name_tags() {
    let mut raw = node_55();
    raw.tags.push(RawTag {
        key: "name".to_string(),
        value: "Main St".to_string(),
    });

    let shaped = shape_element(raw, &CorrectionTable::default()).expect("shape");
    let ShapedElement::Node { tags, .. } = shaped else {
        panic!("expected a node");
    };
    assert_eq!(tags[0].value, "Main St");
}

#[test]
fn way_references_become_ordered_positions() {
    let mut raw = way_101();
    raw.node_refs = vec!["55".to_string(), "56".to_string(), "57".to_string()];

    let shaped = shape_element(raw, &CorrectionTable::default()).expect("shape");
    let ShapedElement::Way { row, way_nodes, .. } = shaped else {
        panic!("expected a way");
    };

    assert_eq!(row.id, "101");
    assert_eq!(way_nodes.len(), 3);
    for (index, way_node) in way_nodes.iter().enumerate() {
        assert_eq!(way_node.id, "101");
        assert_eq!(way_node.position, index as u64);
    }
    let node_ids: Vec<&str> = way_nodes
        .iter()
        .map(|way_node| way_node.node_id.as_str())
        .collect();
    assert_eq!(node_ids, vec!["55", "56", "57"]);
}

#[test]
fn way_with_no_references_shapes_to_zero_way_node_rows() {
    let shaped = shape_element(way_101(), &CorrectionTable::default()).expect("shape");
    let ShapedElement::Way { way_nodes, .. } = shaped else {
        panic!("expected a way");
    };
    assert!(way_nodes.is_empty());
}

#[test]
fn missing_required_attribute_names_the_element() {
    let mut raw = node_55();
    raw.attributes.remove("uid");

    let error = shape_element(raw, &CorrectionTable::default()).expect_err("must fail");
    let ShapeError::MissingAttribute {
        kind,
        id,
        attribute,
    } = error
    else {
        panic!("expected MissingAttribute");
    };
    assert_eq!(kind, ElementKind::Node);
    assert_eq!(id, "55");
    assert_eq!(attribute, "uid");
}

#[test]
fn relations_are_not_shaped() {
    let raw = element(ElementKind::Relation, &[("id", "900")]);
    assert!(matches!(
        shape_element(raw, &CorrectionTable::default()),
        Err(ShapeError::UnsupportedKind {
            kind: ElementKind::Relation
        })
    ));
}
