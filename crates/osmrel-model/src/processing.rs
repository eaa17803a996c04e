//! Pipeline configuration and result types.
//!
//! Configuration is an explicit value handed to the orchestrator at
//! construction; there is no ambient process-wide state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Table;

/// One pipeline run, fully described.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Path to the source OSM XML document.
    pub input: PathBuf,
    /// Directory receiving the five CSV outputs.
    pub output_dir: PathBuf,
    /// Check every shaped row against the declared schema before writing.
    /// Off by default: validation is substantially more expensive than
    /// shaping.
    pub validate: bool,
    /// Optional JSON file overriding the built-in street-suffix
    /// correction table.
    pub corrections: Option<PathBuf>,
}

impl PipelineOptions {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            validate: false,
            corrections: None,
        }
    }

    /// Enable or disable schema validation.
    #[must_use]
    pub fn with_validate(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    /// Set a corrections file overriding the built-in table.
    #[must_use]
    pub fn with_corrections(mut self, path: Option<PathBuf>) -> Self {
        self.corrections = path;
        self
    }
}

/// Row counts produced by one pipeline pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Top-level elements consumed from the reader.
    pub elements: u64,
    pub nodes: u64,
    pub node_tags: u64,
    pub ways: u64,
    pub way_nodes: u64,
    pub way_tags: u64,
}

impl PipelineSummary {
    /// Rows written to one table.
    pub fn rows(&self, table: Table) -> u64 {
        match table {
            Table::Nodes => self.nodes,
            Table::NodeTags => self.node_tags,
            Table::Ways => self.ways,
            Table::WayNodes => self.way_nodes,
            Table::WayTags => self.way_tags,
        }
    }

    /// Rows written across all tables.
    pub fn total_rows(&self) -> u64 {
        Table::ALL.iter().map(|table| self.rows(*table)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_totals_across_tables() {
        let summary = PipelineSummary {
            elements: 3,
            nodes: 2,
            node_tags: 1,
            ways: 1,
            way_nodes: 2,
            way_tags: 1,
        };
        assert_eq!(summary.total_rows(), 7);
        assert_eq!(summary.rows(Table::WayNodes), 2);
    }

    #[test]
    fn options_serialize() {
        let options = PipelineOptions::new("map.osm", "out").with_validate(true);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: PipelineOptions = serde_json::from_str(&json).expect("deserialize options");
        assert!(round.validate);
        assert_eq!(round.input, PathBuf::from("map.osm"));
    }
}
