use std::collections::BTreeMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use log::debug;

use crate::config::SheetSelection;
use crate::data::clean::COUNT_COLUMN;
use crate::data::model::{CellValue, RawTable};
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// Workbook loading
// ---------------------------------------------------------------------------

/// Parse the selected sheets of an in-memory `.xlsx` workbook into raw
/// tables, in selection order.
///
/// Fails with [`ChartError::Format`] when a selected sheet does not exist,
/// has no data rows under its header, or is missing the label, metric, or
/// fixed `"Count"` column. Cell *types* are not interpreted here; that is
/// the sanitizer's job.
pub fn load_workbook(
    bytes: &[u8],
    selections: &[SheetSelection],
) -> Result<Vec<RawTable>, ChartError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let mut tables = Vec::with_capacity(selections.len());
    for sel in selections {
        let range = workbook.worksheet_range(&sel.sheet).map_err(|_| {
            ChartError::Format(format!("selected sheet `{}` not found in workbook", sel.sheet))
        })?;

        let mut rows_iter = range.rows();
        let header = rows_iter.next().ok_or_else(|| {
            ChartError::Format(format!("sheet `{}` is empty", sel.sheet))
        })?;
        let columns: Vec<String> = header.iter().map(cell_to_value).map(|c| c.to_string()).collect();

        let mut rows: Vec<BTreeMap<String, CellValue>> = Vec::new();
        for row in rows_iter {
            let mut record = BTreeMap::new();
            for (col, cell) in columns.iter().zip(row.iter()) {
                record.insert(col.clone(), cell_to_value(cell));
            }
            rows.push(record);
        }

        if rows.is_empty() {
            return Err(ChartError::Format(format!(
                "sheet `{}` has a header but no data rows",
                sel.sheet
            )));
        }

        let table = RawTable {
            sheet: sel.sheet.clone(),
            columns,
            rows,
        };
        require_column(&table, &sel.label_column)?;
        require_column(&table, COUNT_COLUMN)?;
        require_column(&table, &sel.metric_column)?;

        debug!(
            "loaded sheet `{}`: {} rows, {} columns",
            table.sheet,
            table.rows.len(),
            table.columns.len()
        );
        tables.push(table);
    }

    Ok(tables)
}

fn require_column(table: &RawTable, name: &str) -> Result<(), ChartError> {
    if table.has_column(name) {
        Ok(())
    } else {
        Err(ChartError::Format(format!(
            "sheet `{}` is missing required column `{name}`",
            table.sheet
        )))
    }
}

fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::String(b.to_string()),
        Data::DateTime(v) => CellValue::Number(v.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        // Cell errors (#N/A etc.) carry no usable value; keep the text so
        // label columns stay readable and numeric parsing still fails.
        Data::Error(e) => CellValue::String(format!("{e:?}")),
    }
}
