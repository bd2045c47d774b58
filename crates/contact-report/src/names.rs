//! Output file naming.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

/// Prefix of the cleaned table file.
pub const CLEANED_PREFIX: &str = "base_limpia";

/// Prefix of the removal report file.
pub const REPORT_PREFIX: &str = "informe";

/// Timestamp format embedded in output names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Extension of generated tables.
pub const OUTPUT_EXTENSION: &str = "csv";

/// File names for one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub cleaned: String,
    pub report: String,
}

impl OutputNames {
    /// Names stamped with the current local time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// Names stamped with `timestamp`.
    pub fn at<Tz>(timestamp: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        Self {
            cleaned: format!("{CLEANED_PREFIX}_{stamp}.{OUTPUT_EXTENSION}"),
            report: format!("{REPORT_PREFIX}_{stamp}.{OUTPUT_EXTENSION}"),
        }
    }

    /// Full paths under `dir`.
    pub fn paths_in(&self, dir: &Path) -> (PathBuf, PathBuf) {
        (dir.join(&self.cleaned), dir.join(&self.report))
    }
}
