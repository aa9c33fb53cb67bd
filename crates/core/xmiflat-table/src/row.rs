//! Rendering of one record into the output columns.
//!
//! Booleans render as `True`/`False` and floats always carry a decimal
//! point, so tables match those produced by the pandas-based tooling the
//! downstream notebooks were written against.

use xmiflat_types::{ConceptRecord, COLUMNS};

/// Fields of `record` in column order, with `null` for absent values.
pub fn render_row(record: &ConceptRecord, null: &str) -> [String; COLUMNS.len()] {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| null.to_string());
    let float = |value: Option<f64>| value.map(format_float).unwrap_or_else(|| null.to_string());
    let flag = |value: Option<bool>| value.map(format_bool).unwrap_or_else(|| null.to_string());

    [
        record.mention_kind.clone(),
        text(&record.concept_kind),
        record.concept_id.to_string(),
        record.span.start.to_string(),
        record.span.end.to_string(),
        text(&record.cui),
        format_bool(record.negated),
        text(&record.preferred_text),
        text(&record.coding_scheme),
        text(&record.tui),
        float(record.score),
        float(record.confidence),
        float(record.uncertainty),
        flag(record.conditional),
        flag(record.generic),
        text(&record.subject),
        text(&record.part_of_speech),
        record.reconstructed_text.clone(),
    ]
}

pub fn format_bool(value: bool) -> String {
    let s = if value { "True" } else { "False" };
    s.to_string()
}

/// Shortest representation that reads back to `value`, with at least one
/// fractional digit for finite values.
pub fn format_float(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains(['.', 'e', 'E']) {
        format!("{}.0", s)
    } else {
        s
    }
}
