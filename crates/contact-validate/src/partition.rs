//! Splits a contact table into cleaned rows and a removal report.

use std::time::Instant;

use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::{debug, info, trace};

use contact_model::{
    Field, PartitionSummary, REASON_COLUMN, RejectionReasons, ValidationSelection,
};

use crate::email::check_email;
use crate::error::{PartitionError, Result};
use crate::name::check_name;
use crate::value::cell_text;

/// Result of partitioning a table.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Rows that passed every selected check, input columns only.
    pub cleaned: DataFrame,
    /// Rows that failed at least one check, plus the `Motivo` column.
    pub removed: DataFrame,
    pub summary: PartitionSummary,
}

/// Per-row verdicts for the selected fields. Lives only during a partition run.
#[derive(Debug, Clone)]
pub struct VerdictTable {
    height: usize,
    columns: Vec<(Field, Vec<bool>)>,
}

impl VerdictTable {
    /// Evaluate the selected fields for every row of `df`.
    ///
    /// Every selected column is checked for presence before any row is read.
    pub fn evaluate(df: &DataFrame, selection: &ValidationSelection) -> Result<Self> {
        for field in selection.fields() {
            if df.get_column_index(field.column()).is_none() {
                return Err(PartitionError::MissingColumn {
                    column: field.column().to_string(),
                });
            }
        }

        let height = df.height();
        let mut columns = Vec::new();
        for field in selection.fields() {
            let column = df.column(field.column())?;
            let mut verdicts = Vec::with_capacity(height);
            for idx in 0..height {
                let text = cell_text(column.get(idx)?);
                let valid = field_verdict(field, idx, text.as_deref());
                verdicts.push(valid);
            }
            debug!(
                field = %field,
                column = field.column(),
                invalid = verdicts.iter().filter(|valid| !**valid).count(),
                "field evaluated"
            );
            columns.push((field, verdicts));
        }
        Ok(Self { height, columns })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-level verdict: every selected field passed.
    pub fn row_passes(&self, row: usize) -> bool {
        self.columns.iter().all(|(_, verdicts)| verdicts[row])
    }

    /// Reasons for one row, name before email.
    pub fn reasons(&self, row: usize) -> RejectionReasons {
        self.columns
            .iter()
            .filter(|(_, verdicts)| !verdicts[row])
            .map(|(field, _)| field.rejection())
            .collect()
    }
}

fn field_verdict(field: Field, row: usize, value: Option<&str>) -> bool {
    match field {
        Field::Nombre => match check_name(value) {
            Ok(()) => true,
            Err(rejection) => {
                trace!(row, field = %field, stage = rejection.stage(), "value rejected");
                false
            }
        },
        Field::Email => match check_email(value) {
            Ok(()) => true,
            Err(rejection) => {
                trace!(row, field = %field, %rejection, "value rejected");
                false
            }
        },
    }
}

/// Partition `df` into cleaned rows and a removal report.
///
/// Both outputs keep input row order. Fields outside `selection` are never
/// checked, so an empty selection keeps every row.
pub fn partition(df: &DataFrame, selection: &ValidationSelection) -> Result<Partition> {
    let start = Instant::now();
    let verdicts = VerdictTable::evaluate(df, selection)?;

    let height = verdicts.height();
    let mut summary = PartitionSummary::new(height);
    let mut keep = Vec::with_capacity(height);
    let mut motivos = Vec::new();
    for row in 0..height {
        if verdicts.row_passes(row) {
            keep.push(true);
            summary.record_kept();
        } else {
            let reasons = verdicts.reasons(row);
            summary.record_removed(reasons.iter());
            motivos.push(reasons.to_string());
            keep.push(false);
        }
    }

    let drop: Vec<bool> = keep.iter().map(|kept| !kept).collect();
    let keep_mask = BooleanChunked::from_slice("keep".into(), &keep);
    let drop_mask = BooleanChunked::from_slice("drop".into(), &drop);

    let cleaned = df.filter(&keep_mask)?;
    let mut removed = df.filter(&drop_mask)?;
    if removed.get_column_index(REASON_COLUMN).is_some() {
        removed = removed.drop(REASON_COLUMN)?;
    }
    removed.with_column(Series::new(REASON_COLUMN.into(), motivos))?;

    info!(
        selection = ?selection.keys(),
        total = summary.total,
        kept = summary.kept,
        removed = summary.removed,
        duration_ms = start.elapsed().as_millis(),
        "partition complete"
    );

    Ok(Partition {
        cleaned,
        removed,
        summary,
    })
}
