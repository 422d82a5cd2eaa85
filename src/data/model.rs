use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single worksheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed worksheet cell, before any cleaning.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Try to interpret the cell as an `f64`.
    ///
    /// Numeric strings parse too, mirroring coercion-style numeric cleaning:
    /// `"9"` is a number, `"N/A"` is not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::String(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            // Integral floats print without a trailing ".0" so labels like
            // row ids read the way they did in the sheet.
            CellValue::Number(v) if v.fract() == 0.0 => write!(f, "{}", *v as i64),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – one worksheet before cleaning
// ---------------------------------------------------------------------------

/// One worksheet's content: ordered rows mapping column name → cell value.
/// Source of truth before cleaning; no cell is interpreted at this stage.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// The worksheet name this table came from.
    pub sheet: String,
    /// Header row, in sheet order.
    pub columns: Vec<String>,
    /// Data rows, in sheet order.
    pub rows: Vec<BTreeMap<String, CellValue>>,
}

impl RawTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

// ---------------------------------------------------------------------------
// CleanedRecord / Panel – the sanitized, ranked view
// ---------------------------------------------------------------------------

/// One row that survived numeric cleaning.
///
/// `count` drives ranking and bar length; `metric` drives colour only.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    pub label: String,
    pub count: f64,
    pub metric: f64,
}

/// One category's ranked records, ready for layout.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Display name shown as the sub-plot title.
    pub title: String,
    /// Sorted descending by `count`; ties keep their original sheet order.
    pub records: Vec<CleanedRecord>,
    /// Original label → display label, applied at draw time.
    pub label_overrides: BTreeMap<String, String>,
}

impl Panel {
    /// Display label for a record, honouring the rename map.
    pub fn display_label<'a>(&'a self, label: &'a str) -> &'a str {
        self.label_overrides
            .get(label)
            .map(String::as_str)
            .unwrap_or(label)
    }

    /// Largest count in this panel (0.0 when empty, which the sanitizer
    /// prevents from reaching layout).
    pub fn max_count(&self) -> f64 {
        self.records.iter().map(|r| r.count).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_value_parses_numeric_strings() {
        assert_eq!(CellValue::String(" 9 ".into()).as_f64(), Some(9.0));
        assert_eq!(CellValue::String("3.5".into()).as_f64(), Some(3.5));
        assert_eq!(CellValue::String("N/A".into()).as_f64(), None);
        assert_eq!(CellValue::Number(2.0).as_f64(), Some(2.0));
        assert_eq!(CellValue::Empty.as_f64(), None);
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(7.0).to_string(), "7");
        assert_eq!(CellValue::Number(7.25).to_string(), "7.25");
    }

    #[test]
    fn display_label_honours_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("GO:0005737".to_string(), "Cytoplasm".to_string());
        let panel = Panel {
            title: "Cellular Component".into(),
            records: Vec::new(),
            label_overrides: overrides,
        };
        assert_eq!(panel.display_label("GO:0005737"), "Cytoplasm");
        assert_eq!(panel.display_label("GO:0005634"), "GO:0005634");
    }
}
