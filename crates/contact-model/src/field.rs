//! Field kinds that can be validated on a contact record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::reason::RejectionReason;

/// Source column holding the contact name.
pub const NAME_COLUMN: &str = "Nombre";

/// Source column holding the contact email.
pub const EMAIL_COLUMN: &str = "Email";

/// Column appended to the removal report with the composed reason.
pub const REASON_COLUMN: &str = "Motivo";

/// A validatable field of a contact record.
///
/// The declaration order is the order in which reasons are reported:
/// name before email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Nombre,
    Email,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; 2] = [Field::Nombre, Field::Email];

    /// Key used to request this field in a selection.
    pub fn key(self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Email => "email",
        }
    }

    /// Name of the table column the field is read from.
    pub fn column(self) -> &'static str {
        match self {
            Field::Nombre => NAME_COLUMN,
            Field::Email => EMAIL_COLUMN,
        }
    }

    /// Reason recorded when a value of this field fails validation.
    pub fn rejection(self) -> RejectionReason {
        match self {
            Field::Nombre => RejectionReason::InvalidName,
            Field::Email => RejectionReason::InvalidEmail,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("nombre") {
            Ok(Field::Nombre)
        } else if trimmed.eq_ignore_ascii_case("email") {
            Ok(Field::Email)
        } else {
            Err(ModelError::UnknownField(trimmed.to_string()))
        }
    }
}
