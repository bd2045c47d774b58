//! Output generation for contact cleaning runs.
//!
//! - **Cleaned table**: `base_limpia_<timestamp>.csv`
//! - **Removal report**: `informe_<timestamp>.csv`, with the `Motivo` column
//! - **Summary**: optional JSON copy of the run counts

mod names;
mod writer;

pub use names::{CLEANED_PREFIX, OUTPUT_EXTENSION, OutputNames, REPORT_PREFIX, TIMESTAMP_FORMAT};
pub use writer::{OutputPaths, write_outputs, write_summary_json, write_table_csv};
