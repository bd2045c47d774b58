use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reason::RejectionReason;

/// Row counts produced by a partition run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSummary {
    pub total: usize,
    pub kept: usize,
    pub removed: usize,
    /// Removed rows per reason. A row failing both fields counts once for each.
    pub by_reason: BTreeMap<RejectionReason, usize>,
}

impl PartitionSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record_kept(&mut self) {
        self.kept += 1;
    }

    pub fn record_removed<I>(&mut self, reasons: I)
    where
        I: IntoIterator<Item = RejectionReason>,
    {
        self.removed += 1;
        for reason in reasons {
            *self.by_reason.entry(reason).or_default() += 1;
        }
    }

    pub fn reason_count(&self, reason: RejectionReason) -> usize {
        self.by_reason.get(&reason).copied().unwrap_or(0)
    }

    pub fn has_removals(&self) -> bool {
        self.removed > 0
    }
}
