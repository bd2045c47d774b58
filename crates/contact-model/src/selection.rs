//! The set of fields a caller wants validated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::Field;

/// Fields requested for validation in a run.
///
/// Fields that are not selected are treated as valid for every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSelection {
    fields: BTreeSet<Field>,
}

impl ValidationSelection {
    /// Selection with no fields; nothing is validated.
    pub fn none() -> Self {
        Self::default()
    }

    /// Selection with every supported field.
    pub fn all() -> Self {
        Field::ALL.into_iter().collect()
    }

    /// Build a selection from keys such as `"nombre"` or `"email"`.
    pub fn from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::none();
        for key in keys {
            selection.insert(key.as_ref().parse()?);
        }
        Ok(selection)
    }

    pub fn insert(&mut self, field: Field) {
        self.fields.insert(field);
    }

    pub fn with(mut self, field: Field) -> Self {
        self.insert(field);
        self
    }

    pub fn is_selected(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Selected fields in canonical order (name before email).
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    /// Selection keys, in canonical order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields().map(Field::key).collect()
    }
}

impl FromIterator<Field> for ValidationSelection {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
