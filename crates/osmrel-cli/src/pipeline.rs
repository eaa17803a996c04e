//! The one-pass transformation pipeline.
//!
//! Stages, in order, per element: read, shape, optionally validate,
//! write. Nothing is written for an element until it has fully shaped
//! and, when the toggle is on, validated, so no element leaves partial
//! rows across tables. The first failure of any stage aborts the run;
//! the output sinks are released by scope, with rows written so far
//! left in place (documented limitation, not atomicity).

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use osmrel_ingest::OsmReader;
use osmrel_model::{PipelineOptions, PipelineSummary, ShapedElement};
use osmrel_output::TableWriters;
use osmrel_transform::{CorrectionTable, shape_element};
use osmrel_validate::validate_element;

/// Run one full pass over the input document.
pub fn run_pipeline(options: &PipelineOptions) -> Result<PipelineSummary> {
    let span = info_span!("process", input = %options.input.display());
    let _guard = span.enter();

    let corrections = load_corrections(options)?;
    debug!(corrections = corrections.len(), validate = options.validate, "pipeline configured");

    let reader = OsmReader::from_path(&options.input)?;
    let mut writers = TableWriters::create(&options.output_dir)
        .with_context(|| format!("open output sinks in {}", options.output_dir.display()))?;

    let mut summary = PipelineSummary::default();
    for element in reader {
        let element = element.context("read element")?;
        let shaped = shape_element(element, &corrections)?;
        if options.validate {
            validate_element(&shaped).with_context(|| {
                format!("{} {} failed validation", shaped.kind(), shaped.id())
            })?;
        }
        writers.write_element(&shaped)?;
        tally(&mut summary, &shaped);
    }
    writers.finish()?;

    info!(
        elements = summary.elements,
        rows = summary.total_rows(),
        "pipeline complete"
    );
    Ok(summary)
}

fn load_corrections(options: &PipelineOptions) -> Result<CorrectionTable> {
    match &options.corrections {
        Some(path) => CorrectionTable::from_json_path(path)
            .with_context(|| format!("load corrections from {}", path.display())),
        None => Ok(CorrectionTable::default()),
    }
}

fn tally(summary: &mut PipelineSummary, shaped: &ShapedElement) {
    summary.elements += 1;
    match shaped {
        ShapedElement::Node { tags, .. } => {
            summary.nodes += 1;
            summary.node_tags += tags.len() as u64;
        }
        ShapedElement::Way {
            way_nodes, tags, ..
        } => {
            summary.ways += 1;
            summary.way_nodes += way_nodes.len() as u64;
            summary.way_tags += tags.len() as u64;
        }
    }
}
