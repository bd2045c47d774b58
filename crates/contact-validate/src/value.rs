//! Cell coercion from Polars values to validator input.

use polars::prelude::AnyValue;

/// Converts a cell to the text a validator sees.
///
/// Nulls and NaN floats are absent values. Everything else is rendered in
/// its string form so that wrongly-typed cells are validated, never rejected
/// with an error. Floats always keep a fractional part (`12.0`), which is how
/// integer columns with blanks arrive from spreadsheet exports.
pub fn cell_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) if v.is_nan() => None,
        AnyValue::Float64(v) if v.is_nan() => None,
        AnyValue::Float32(v) => Some(format!("{v:?}")),
        AnyValue::Float64(v) => Some(format!("{v:?}")),
        AnyValue::Boolean(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
