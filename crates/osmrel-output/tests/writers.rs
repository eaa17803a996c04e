//! Writer behavior: headers, row order, quoting, scoped sinks.

use std::path::Path;

use osmrel_model::{NodeRow, ShapedElement, Table, TagRow, WayNodeRow, WayRow};
use osmrel_output::TableWriters;

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open csv");
    reader
        .records()
        .map(|record| {
            record
                .expect("record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn sample_node() -> ShapedElement {
    ShapedElement::Node {
        row: NodeRow {
            id: "55".into(),
            lat: "42.36".into(),
            lon: "-71.09".into(),
            user: "mapper, \"the first\"".into(),
            uid: "7".into(),
            version: "2".into(),
            changeset: "11".into(),
            timestamp: "2017-01-01T00:00:00Z".into(),
        },
        tags: vec![TagRow {
            id: "55".into(),
            key: "name".into(),
            value: "Café\nAnnex".into(),
            tag_type: "regular".into(),
        }],
    }
}

fn sample_way() -> ShapedElement {
    ShapedElement::Way {
        row: WayRow {
            id: "101".into(),
            user: "mapper".into(),
            uid: "7".into(),
            version: "3".into(),
            changeset: "13".into(),
            timestamp: "2017-01-03T00:00:00Z".into(),
        },
        way_nodes: vec![
            WayNodeRow {
                id: "101".into(),
                node_id: "55".into(),
                position: 0,
            },
            WayNodeRow {
                id: "101".into(),
                node_id: "56".into(),
                position: 1,
            },
        ],
        tags: vec![TagRow {
            id: "101".into(),
            key: "street".into(),
            value: "Main Street".into(),
            tag_type: "addr".into(),
        }],
    }
}

#[test]
fn all_sinks_exist_with_headers_before_any_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writers = TableWriters::create(dir.path()).expect("create");
    writers.finish().expect("finish");

    for table in Table::ALL {
        let rows = read_rows(&dir.path().join(table.file_name()));
        assert_eq!(rows.len(), 1, "{table} should hold only its header");
        assert_eq!(rows[0], table.columns(), "{table}");
    }
}

#[test]
fn rows_land_in_their_tables_in_arrival_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut writers = TableWriters::create(dir.path()).expect("create");
    writers.write_element(&sample_node()).expect("write node");
    writers.write_element(&sample_way()).expect("write way");
    writers.finish().expect("finish");

    let nodes = read_rows(&dir.path().join("nodes.csv"));
    assert_eq!(nodes[1][0], "55");

    let way_nodes = read_rows(&dir.path().join("ways_nodes.csv"));
    assert_eq!(way_nodes[1], vec!["101", "55", "0"]);
    assert_eq!(way_nodes[2], vec!["101", "56", "1"]);

    let way_tags = read_rows(&dir.path().join("ways_tags.csv"));
    assert_eq!(way_tags[1], vec!["101", "street", "Main Street", "addr"]);
}

#[test]
fn quoting_preserves_delimiters_newlines_and_unicode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut writers = TableWriters::create(dir.path()).expect("create");
    writers.write_element(&sample_node()).expect("write node");
    writers.finish().expect("finish");

    let nodes = read_rows(&dir.path().join("nodes.csv"));
    assert_eq!(nodes[1][3], "mapper, \"the first\"");

    let tags = read_rows(&dir.path().join("nodes_tags.csv"));
    assert_eq!(tags[1][2], "Café\nAnnex");
}

#[test]
fn dropping_the_handle_releases_the_sinks() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut writers = TableWriters::create(dir.path()).expect("create");
        writers.write_element(&sample_way()).expect("write way");
        // dropped without finish(), as on an error path
    }
    // The files remain openable and parseable afterwards.
    let ways = read_rows(&dir.path().join("ways.csv"));
    assert_eq!(ways[0], Table::Ways.columns());
}
