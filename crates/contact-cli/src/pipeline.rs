//! Cleaning pipeline with explicit stages.
//!
//! 1. **Ingest**: check the input file and read it into a table
//! 2. **Partition**: apply the selected validators and split the rows
//! 3. **Output**: write the cleaned table, the removal report and the summary
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use contact_ingest::read_contact_table;
use contact_model::{
    CleanOptions, EMAIL_COLUMN, NAME_COLUMN, PartitionSummary, REASON_COLUMN, ValidationSelection,
};
use contact_report::{OutputNames, OutputPaths, write_outputs, write_summary_json};
use contact_validate::{Partition, cell_text, partition};

use crate::logging::redact_value;

/// Removed rows echoed at debug level.
const REMOVED_SAMPLE_ROWS: usize = 5;

/// Outcome of one cleaning run.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub selection: ValidationSelection,
    pub summary: PartitionSummary,
    /// `None` on dry runs.
    pub outputs: Option<OutputPaths>,
    pub summary_json: Option<PathBuf>,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the input table.
pub fn ingest(input: &Path) -> Result<DataFrame> {
    let start = Instant::now();
    let df = read_contact_table(input).with_context(|| format!("read {}", input.display()))?;
    info!(
        path = %input.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(df)
}

// ============================================================================
// Stage 2: Partition
// ============================================================================

/// Split the table into kept and removed rows.
pub fn validate(df: &DataFrame, selection: &ValidationSelection) -> Result<Partition> {
    let result = partition(df, selection).context("partition contacts")?;
    log_removed_sample(&result.removed);
    Ok(result)
}

fn log_removed_sample(removed: &DataFrame) {
    let text = |column: &str, row: usize| {
        removed
            .column(column)
            .ok()
            .and_then(|col| col.get(row).ok())
            .and_then(cell_text)
    };
    for row in 0..removed.height().min(REMOVED_SAMPLE_ROWS) {
        let name = text(NAME_COLUMN, row).unwrap_or_default();
        let email = text(EMAIL_COLUMN, row).unwrap_or_default();
        let reason = text(REASON_COLUMN, row).unwrap_or_default();
        debug!(
            row,
            name = redact_value(&name),
            email = redact_value(&email),
            reason = %reason,
            "row removed"
        );
    }
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the outputs of a run. Dry runs write nothing and return `None`.
pub fn output(
    result: &Partition,
    options: &CleanOptions,
    names: &OutputNames,
) -> Result<Option<OutputPaths>> {
    if let Some(path) = &options.summary_json {
        write_summary_json(&result.summary, path)?;
    }
    if options.dry_run {
        info!("dry run, tables not written");
        return Ok(None);
    }
    write_outputs(result, &options.output_dir, names).map(Some)
}

/// Run every stage for one input file.
pub fn run_clean(input: &Path, options: &CleanOptions, names: &OutputNames) -> Result<CleanResult> {
    let span = info_span!("clean", input = %input.display(), checks = ?options.selection.keys());
    let _guard = span.enter();
    let start = Instant::now();

    let df = ingest(input)?;
    let result = validate(&df, &options.selection)?;
    let outputs = output(&result, options, names)?;

    info!(
        kept = result.summary.kept,
        removed = result.summary.removed,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanResult {
        input: input.to_path_buf(),
        selection: options.selection.clone(),
        summary: result.summary,
        outputs,
        summary_json: options.summary_json.clone(),
    })
}
