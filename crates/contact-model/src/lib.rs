//! Data model for contact cleaning: fields, selections, rejection reasons
//! and run summaries.

pub mod error;
pub mod field;
pub mod options;
pub mod reason;
pub mod selection;
pub mod summary;

pub use error::{ModelError, Result};
pub use field::{EMAIL_COLUMN, Field, NAME_COLUMN, REASON_COLUMN};
pub use options::{CleanOptions, DEFAULT_OUTPUT_DIR};
pub use reason::{DEFAULT_REASON_SEPARATOR, RejectionReason, RejectionReasons};
pub use selection::ValidationSelection;
pub use summary::PartitionSummary;
