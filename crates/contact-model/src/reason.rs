//! Rejection reason codes and their presentation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when a row has more than one rejection reason.
pub const DEFAULT_REASON_SEPARATOR: &str = ", ";

/// Why a record was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    InvalidName,
    InvalidEmail,
}

impl RejectionReason {
    /// Human-readable phrase written to the report.
    pub fn phrase(self) -> &'static str {
        match self {
            RejectionReason::InvalidName => "Nombre inválido",
            RejectionReason::InvalidEmail => "Email inválido",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Ordered reasons collected for a single row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionReasons {
    reasons: Vec<RejectionReason>,
}

impl RejectionReasons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reason, keeping insertion order. Duplicates are ignored.
    pub fn push(&mut self, reason: RejectionReason) {
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = RejectionReason> + '_ {
        self.reasons.iter().copied()
    }

    /// Render the reasons with a custom separator.
    pub fn join(&self, separator: &str) -> String {
        let phrases: Vec<&str> = self.iter().map(RejectionReason::phrase).collect();
        phrases.join(separator)
    }
}

impl fmt::Display for RejectionReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_REASON_SEPARATOR))
    }
}

impl FromIterator<RejectionReason> for RejectionReasons {
    fn from_iter<I: IntoIterator<Item = RejectionReason>>(iter: I) -> Self {
        let mut reasons = Self::new();
        for reason in iter {
            reasons.push(reason);
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_in_insertion_order() {
        let mut reasons = RejectionReasons::new();
        reasons.push(RejectionReason::InvalidName);
        reasons.push(RejectionReason::InvalidEmail);
        assert_eq!(reasons.to_string(), "Nombre inválido, Email inválido");
        assert_eq!(reasons.join(" | "), "Nombre inválido | Email inválido");
    }

    #[test]
    fn single_reason_has_no_separator() {
        let reasons: RejectionReasons = [RejectionReason::InvalidEmail].into_iter().collect();
        assert_eq!(reasons.to_string(), "Email inválido");
        assert_eq!(reasons.len(), 1);
    }

    #[test]
    fn empty_renders_empty() {
        assert_eq!(RejectionReasons::new().to_string(), "");
    }
}
