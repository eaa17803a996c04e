//! The five table sinks behind one scoped handle.
//!
//! All sinks are acquired together before the first row is written and
//! the headers go out once, at open time, in the declared column order.
//! Rows append in arrival order; the csv crate's quoting keeps arbitrary
//! Unicode text from corrupting the delimiter/quoting rules. Dropping
//! the handle releases every sink; [`TableWriters::finish`] additionally
//! surfaces flush errors on the success path.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use thiserror::Error;

use osmrel_model::{ShapedElement, Table};

/// An output sink failed; the offending table is always named.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create {table} sink at {path}: {source}")]
    Create {
        table: Table,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to append to {table} sink: {source}")]
    Append {
        table: Table,
        #[source]
        source: csv::Error,
    },
    #[error("failed to flush {table} sink: {source}")]
    Flush {
        table: Table,
        #[source]
        source: std::io::Error,
    },
}

type Sink = csv::Writer<BufWriter<File>>;

/// Scoped handle over the five CSV outputs of one pipeline run.
pub struct TableWriters {
    nodes: Sink,
    node_tags: Sink,
    ways: Sink,
    way_nodes: Sink,
    way_tags: Sink,
}

impl TableWriters {
    /// Open all five sinks under `dir` and write each header row.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, OutputError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            nodes: open_sink(dir, Table::Nodes)?,
            node_tags: open_sink(dir, Table::NodeTags)?,
            ways: open_sink(dir, Table::Ways)?,
            way_nodes: open_sink(dir, Table::WayNodes)?,
            way_tags: open_sink(dir, Table::WayTags)?,
        })
    }

    /// Append every row of one shaped element to its table.
    pub fn write_element(&mut self, shaped: &ShapedElement) -> Result<(), OutputError> {
        match shaped {
            ShapedElement::Node { row, tags } => {
                append(&mut self.nodes, Table::Nodes, row.record())?;
                for tag in tags {
                    append(&mut self.node_tags, Table::NodeTags, tag.record())?;
                }
            }
            ShapedElement::Way {
                row,
                way_nodes,
                tags,
            } => {
                append(&mut self.ways, Table::Ways, row.record())?;
                for way_node in way_nodes {
                    append(&mut self.way_nodes, Table::WayNodes, way_node.record())?;
                }
                for tag in tags {
                    append(&mut self.way_tags, Table::WayTags, tag.record())?;
                }
            }
        }
        Ok(())
    }

    /// Flush all sinks, surfacing the first failure with its table name.
    pub fn finish(mut self) -> Result<(), OutputError> {
        for (table, sink) in [
            (Table::Nodes, &mut self.nodes),
            (Table::NodeTags, &mut self.node_tags),
            (Table::Ways, &mut self.ways),
            (Table::WayNodes, &mut self.way_nodes),
            (Table::WayTags, &mut self.way_tags),
        ] {
            sink.flush()
                .map_err(|source| OutputError::Flush { table, source })?;
        }
        Ok(())
    }
}

fn open_sink(dir: &Path, table: Table) -> Result<Sink, OutputError> {
    let path = dir.join(table.file_name());
    let file = File::create(&path).map_err(|source| OutputError::Create {
        table,
        path: path.clone(),
        source,
    })?;
    let mut sink = csv::Writer::from_writer(BufWriter::new(file));
    sink.write_record(table.columns())
        .map_err(|source| OutputError::Append { table, source })?;
    Ok(sink)
}

fn append<I, F>(sink: &mut Sink, table: Table, record: I) -> Result<(), OutputError>
where
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    sink.write_record(record)
        .map_err(|source| OutputError::Append { table, source })
}
