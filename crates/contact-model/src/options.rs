//! Configuration options for a cleaning run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::selection::ValidationSelection;

/// Folder used for generated files when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "uploads";

/// Options controlling a cleaning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Fields to validate.
    pub selection: ValidationSelection,

    /// Folder receiving the cleaned table and the removal report.
    pub output_dir: PathBuf,

    /// Partition and report counts without writing files.
    pub dry_run: bool,

    /// Optional path for a JSON copy of the summary.
    pub summary_json: Option<PathBuf>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            selection: ValidationSelection::none(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dry_run: false,
            summary_json: None,
        }
    }
}

impl CleanOptions {
    pub fn new(selection: ValidationSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_summary_json(mut self, path: Option<PathBuf>) -> Self {
        self.summary_json = path;
        self
    }
}
