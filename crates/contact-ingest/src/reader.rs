//! Input checks and CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use polars::prelude::{CsvReadOptions, DataFrame, PlSmallStr, SerReader};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::header::normalize_headers;

/// Maximum file size for input loading (500 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// File extensions the reader accepts (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv"];

/// Options for reading an input table.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Infer numeric column types. When false every column is read as text,
    /// so payload columns are written back exactly as they were read.
    pub infer_types: bool,
    /// Reject files above this size.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            infer_types: false,
            max_file_size: MAX_INPUT_FILE_SIZE,
        }
    }
}

/// Check that `path` names an existing file in a supported format.
pub fn ensure_supported_input(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(IngestError::MissingInput);
    }
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        });
    if !supported {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reject UTF-16 input; UTF-8 with or without BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Read a contact table with default options.
pub fn read_contact_table(path: &Path) -> Result<DataFrame> {
    read_contact_table_with_options(path, &IngestOptions::default())
}

/// Read a contact table from a CSV file with a single header row.
///
/// Header names are trimmed and stripped of a UTF-8 BOM. Empty cells load as
/// nulls.
pub fn read_contact_table_with_options(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let start = Instant::now();
    ensure_supported_input(path)?;
    check_file_size(path, options.max_file_size)?;
    validate_encoding(path)?;

    let infer_length = if options.infer_types { Some(100) } else { Some(0) };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_length)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let headers = normalize_headers(df.get_column_names().into_iter().map(PlSmallStr::as_str));
    if headers.iter().any(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    df.set_column_names(headers.iter().map(String::as_str))?;
    debug!(path = %path.display(), columns = ?headers, "input headers");

    if df.height() == 0 {
        warn!(path = %path.display(), "input table has no rows");
    }
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "input loaded"
    );
    Ok(df)
}
