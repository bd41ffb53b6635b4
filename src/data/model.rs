use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a tabular dataset
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as produced by file parsing or upstream transform
/// nodes. Derived-view caching hashes its inputs, so `CellValue` implements
/// `Hash` manually (floats via `to_bits`).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Str(String),
    Num(f64),
    Null,
}

impl Eq for CellValue {}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Str(s) => s.hash(state),
            CellValue::Num(f) => f.to_bits().hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Str(s) => write!(f, "{s}"),
            CellValue::Num(v) => write!(f, "{v}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the cell as a finite `f64`: numbers pass through, non-empty
    /// strings are trimmed and parsed. Anything else (including NaN/∞ and
    /// `Null`) yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Num(v) if v.is_finite() => Some(*v),
            CellValue::Str(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return None;
                }
                t.parse::<f64>().ok().filter(|v| v.is_finite())
            }
            _ => None,
        }
    }

    /// Trimmed display text. `Null` renders empty, which category
    /// aggregation then skips.
    pub fn display_trimmed(&self) -> String {
        self.to_string().trim().to_string()
    }
}

// ---------------------------------------------------------------------------
// TabularDataset – headers + rows, the canonical in-memory shape
// ---------------------------------------------------------------------------

/// One row of cells, ordered like `headers`.
pub type Row = Vec<CellValue>;

/// The canonical tabular dataset every pipeline node produces or consumes.
///
/// Invariant: each row has exactly `headers.len()` cells. A dataset violating
/// this is malformed; consumers skip the affected computation rather than
/// repairing the data.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    /// Ordered, unique column names.
    pub headers: Vec<String>,
    /// Ordered rows of cells.
    pub rows: Vec<Row>,
}

impl TabularDataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// True when every row's length matches the header count.
    pub fn is_well_formed(&self) -> bool {
        let width = self.headers.len();
        self.rows.iter().all(|r| r.len() == width)
    }

    /// Cell at (row, column-name); `None` for missing columns or ragged rows.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// All cells of a column, in row order. Ragged rows contribute `Null`.
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(idx).unwrap_or(&CellValue::Null))
                .collect(),
        )
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(vals: &[&str]) -> Row {
        vals.iter().map(|v| CellValue::Str(v.to_string())).collect()
    }

    #[test]
    fn test_as_f64_parses_numeric_strings() {
        assert_eq!(CellValue::Str(" 3.5 ".into()).as_f64(), Some(3.5));
        assert_eq!(CellValue::Num(2.0).as_f64(), Some(2.0));
        assert_eq!(CellValue::Str("abc".into()).as_f64(), None);
        assert_eq!(CellValue::Str("".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
        assert_eq!(CellValue::Num(f64::NAN).as_f64(), None);
    }

    #[test]
    fn test_well_formed_detects_ragged_rows() {
        let ds = TabularDataset::new(
            vec!["a".into(), "b".into()],
            vec![cells(&["1", "2"]), cells(&["3"])],
        );
        assert!(!ds.is_well_formed());
    }

    #[test]
    fn test_column_lookup() {
        let ds = TabularDataset::new(
            vec!["a".into(), "b".into()],
            vec![cells(&["1", "2"]), cells(&["3", "4"])],
        );
        assert_eq!(ds.column_index("b"), Some(1));
        assert_eq!(ds.cell(1, "b"), Some(&CellValue::Str("4".into())));
        assert_eq!(ds.column("missing"), None);
    }
}
