//! CLI library components for the contact cleaner.

pub mod logging;
pub mod pipeline;
