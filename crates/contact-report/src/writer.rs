use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use contact_model::PartitionSummary;
use contact_validate::Partition;

use crate::names::OutputNames;

/// Where the outputs of a run were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub cleaned: PathBuf,
    pub report: PathBuf,
}

/// Write one table as CSV with a header row.
pub fn write_table_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut data = df.clone();
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(&mut data)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Write the cleaned table and the removal report into `output_dir`.
///
/// The folder is created when missing. Existing files with the same names
/// are overwritten.
pub fn write_outputs(
    partition: &Partition,
    output_dir: &Path,
    names: &OutputNames,
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let (cleaned, report) = names.paths_in(output_dir);

    write_table_csv(&partition.cleaned, &cleaned)?;
    info!(path = %cleaned.display(), rows = partition.cleaned.height(), "cleaned table written");

    write_table_csv(&partition.removed, &report)?;
    info!(path = %report.display(), rows = partition.removed.height(), "removal report written");

    Ok(OutputPaths { cleaned, report })
}

/// Write the run summary as pretty-printed JSON.
pub fn write_summary_json(summary: &PartitionSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create summary dir {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)
        .with_context(|| format!("write summary: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(path = %path.display(), "summary written");
    Ok(())
}
