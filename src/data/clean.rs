use log::debug;

use crate::data::model::{CleanedRecord, RawTable};
use crate::error::ChartError;

/// The numeric column every sheet must carry; fixed in this domain.
pub const COUNT_COLUMN: &str = "Count";

// ---------------------------------------------------------------------------
// Sanitizer: RawTable → CleanedRecord sequence
// ---------------------------------------------------------------------------

/// Coerce the count and metric cells to numbers and drop unusable rows.
///
/// Row-drop policy (deliberate, not an error):
/// * count or metric cell fails numeric parse → row dropped, never zeroed
/// * count or metric is non-finite (`"NaN"`/`"inf"` parse to floats) → dropped
/// * count is negative → row dropped (counts are non-negative by contract)
///
/// Returns [`ChartError::EmptyPanel`] when no rows survive, so the caller
/// never silently renders an empty panel slot.
pub fn sanitize(
    table: &RawTable,
    label_column: &str,
    metric_column: &str,
) -> Result<Vec<CleanedRecord>, ChartError> {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;

    for row in &table.rows {
        let count = row.get(COUNT_COLUMN).and_then(|c| c.as_f64());
        let metric = row.get(metric_column).and_then(|c| c.as_f64());
        match (count, metric) {
            (Some(count), Some(metric))
                if count.is_finite() && count >= 0.0 && metric.is_finite() =>
            {
                let label = row
                    .get(label_column)
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                records.push(CleanedRecord {
                    label,
                    count,
                    metric,
                });
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(
            "sheet `{}`: dropped {dropped} of {} rows during numeric cleaning",
            table.sheet,
            table.rows.len()
        );
    }

    if records.is_empty() {
        return Err(ChartError::EmptyPanel(table.sheet.clone()));
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Ranker: descending by count, stable on ties
// ---------------------------------------------------------------------------

/// Sort records descending by count. The sort is stable, so records with
/// equal counts keep their original sheet order. Pure apart from the
/// in-place reorder.
pub fn rank(records: &mut [CleanedRecord]) {
    records.sort_by(|a, b| b.count.total_cmp(&a.count));
}
