//! Contact table ingestion.
//!
//! Checks an input path and loads it into a Polars `DataFrame` the
//! partition engine can consume.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use contact_ingest::read_contact_table;
//!
//! let df = read_contact_table(Path::new("contactos.csv"))?;
//! ```

mod error;
mod header;
mod reader;

pub use error::{IngestError, Result};
pub use header::{normalize_header, normalize_headers};
pub use reader::{
    IngestOptions, MAX_INPUT_FILE_SIZE, SUPPORTED_EXTENSIONS, check_file_size,
    ensure_supported_input, read_contact_table, read_contact_table_with_options,
    validate_encoding,
};
