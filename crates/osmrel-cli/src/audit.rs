//! Exploratory audit of anomalous tag values.
//!
//! A read-only consumer of the streaming reader, separate from the
//! production shaping path. It samples the distribution of street-name
//! suffixes and state names so that the correction table can be authored
//! against what the dataset actually contains; its report changes no
//! output.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

use osmrel_ingest::OsmReader;

/// Street suffixes considered canonical; trailing tokens outside this
/// list are reported.
pub const EXPECTED_STREET_TYPES: [&str; 12] = [
    "Street", "Avenue", "Boulevard", "Drive", "Court", "Place", "Square", "Lane", "Road", "Trail",
    "Parkway", "Commons",
];

/// Trailing token of a street name, dotted abbreviations included.
const STREET_TYPE_PATTERN: &str = r"\b\S+\.?$";

/// One audit run, fully described.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Path to the source OSM XML document.
    pub input: PathBuf,
    /// The state name every `addr:state` value is expected to carry.
    pub expected_state: String,
}

impl AuditOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            expected_state: "Massachusetts".to_string(),
        }
    }

    /// Override the expected state name.
    #[must_use]
    pub fn with_expected_state(mut self, state: impl Into<String>) -> Self {
        self.expected_state = state.into();
        self
    }
}

/// Distribution of anomalous values found in one pass.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    /// Elements inspected.
    pub elements: u64,
    /// Unexpected street-suffix tokens with sample street names carrying them.
    pub street_types: BTreeMap<String, BTreeSet<String>>,
    /// `addr:state` values other than the expected one.
    pub unexpected_states: BTreeSet<String>,
}

impl AuditReport {
    /// Total street names with an unexpected suffix.
    pub fn street_name_count(&self) -> usize {
        self.street_types.values().map(BTreeSet::len).sum()
    }
}

/// Survey `addr:street` and `addr:state` values across nodes and ways.
pub fn run_audit(options: &AuditOptions) -> Result<AuditReport> {
    let street_type =
        Regex::new(STREET_TYPE_PATTERN).context("compile street-type pattern")?;

    let mut report = AuditReport::default();
    for element in OsmReader::from_path(&options.input)? {
        let element = element.context("read element")?;
        report.elements += 1;
        for tag in &element.tags {
            match tag.key.as_str() {
                "addr:street" => {
                    if let Some(found) = street_type.find(&tag.value) {
                        let suffix = found.as_str();
                        if !EXPECTED_STREET_TYPES.contains(&suffix) {
                            report
                                .street_types
                                .entry(suffix.to_string())
                                .or_default()
                                .insert(tag.value.clone());
                        }
                    }
                }
                "addr:state" => {
                    if tag.value != options.expected_state {
                        report.unexpected_states.insert(tag.value.clone());
                    }
                }
                _ => {}
            }
        }
    }

    info!(
        elements = report.elements,
        street_types = report.street_types.len(),
        unexpected_states = report.unexpected_states.len(),
        "audit complete"
    );
    Ok(report)
}
