//! Contact field validators and the partition engine.
//!
//! - [`validate_email`] / [`validate_name`]: stateless per-cell predicates.
//! - [`partition`]: applies the selected predicates to every row of a table
//!   and splits it into a cleaned table and a removal report with a
//!   `Motivo` column.

pub mod blocklist;
mod email;
mod error;
mod name;
mod partition;
mod value;

pub use blocklist::EmailBlocklist;
pub use email::{EMAIL_REGEX, EmailRejection, check_email, check_email_with, validate_email};
pub use error::{PartitionError, Result};
pub use name::{NAME_REGEX, NameRejection, check_name, validate_name};
pub use partition::{Partition, VerdictTable, partition};
pub use value::cell_text;
