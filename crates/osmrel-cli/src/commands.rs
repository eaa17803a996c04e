//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use osmrel_cli::audit::{AuditOptions, AuditReport, run_audit};
use osmrel_cli::pipeline::run_pipeline;
use osmrel_model::{PipelineOptions, PipelineSummary, Table};

use crate::cli::{AuditArgs, ProcessArgs};

pub fn run_process(args: &ProcessArgs) -> Result<(PipelineOptions, PipelineSummary)> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("output"));
    let options = PipelineOptions::new(&args.input, output_dir)
        .with_validate(args.validate)
        .with_corrections(args.corrections.clone());
    let summary = run_pipeline(&options)?;
    Ok((options, summary))
}

pub fn run_audit_command(args: &AuditArgs) -> Result<(AuditOptions, AuditReport)> {
    let mut options = AuditOptions::new(&args.input);
    if let Some(state) = &args.expected_state {
        options = options.with_expected_state(state);
    }
    let report = run_audit(&options)?;
    Ok((options, report))
}

pub fn run_tables() {
    for table in Table::ALL {
        println!("{} ({})", table, table.file_name());
        println!("  {}", table.columns().join(", "));
    }
}
