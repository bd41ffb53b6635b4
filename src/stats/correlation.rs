use crate::data::model::{CellValue, TabularDataset};

// ---------------------------------------------------------------------------
// Pearson correlation matrix over the fully-numeric columns
// ---------------------------------------------------------------------------

/// Symmetric correlation matrix with a unit diagonal. `headers` is the
/// numeric-column subset, in original header order.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub headers: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Pearson correlations for every pair of numeric columns.
///
/// A column counts as numeric only when **every** cell is a number or a
/// non-empty numeric string — a single blank or text cell disqualifies it.
/// Fewer than two numeric columns yields `None`. Zero-variance columns get a
/// correlation of 0 against everything (never NaN); the diagonal stays 1.
pub fn correlation_matrix(dataset: &TabularDataset) -> Option<CorrelationMatrix> {
    let mut headers: Vec<String> = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (idx, name) in dataset.headers.iter().enumerate() {
        if let Some(values) = numeric_column(dataset, idx) {
            headers.push(name.clone());
            columns.push(values);
        }
    }

    if headers.len() < 2 {
        return None;
    }

    let n = headers.len();
    let rows = dataset.rows.len() as f64;
    let means: Vec<f64> = columns
        .iter()
        .map(|c| c.iter().sum::<f64>() / rows)
        .collect();

    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let mut ss_i = 0.0;
            let mut ss_j = 0.0;
            let mut cross = 0.0;
            for (&a, &b) in columns[i].iter().zip(&columns[j]) {
                let da = a - means[i];
                let db = b - means[j];
                ss_i += da * da;
                ss_j += db * db;
                cross += da * db;
            }
            let denom = (ss_i * ss_j).sqrt();
            let r = if denom == 0.0 { 0.0 } else { cross / denom };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    Some(CorrelationMatrix { headers, matrix })
}

/// All values of a column iff every cell parses as a finite number.
fn numeric_column(dataset: &TabularDataset, idx: usize) -> Option<Vec<f64>> {
    if dataset.rows.is_empty() {
        return None;
    }
    let mut values = Vec::with_capacity(dataset.rows.len());
    for row in &dataset.rows {
        let cell = row.get(idx)?;
        match cell {
            CellValue::Null => return None,
            other => values.push(other.as_f64()?),
        }
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn dataset(headers: &[&str], rows: &[&[&str]]) -> TabularDataset {
        TabularDataset::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| -> Row {
                    r.iter().map(|c| CellValue::Str(c.to_string())).collect()
                })
                .collect(),
        )
    }

    #[test]
    fn test_proportional_columns_correlate_to_one() {
        let ds = dataset(
            &["a", "b"],
            &[&["1", "2"], &["2", "4"], &["3", "6"]],
        );
        let m = correlation_matrix(&ds).unwrap();
        assert!((m.matrix[0][1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let ds = dataset(
            &["a", "b", "c"],
            &[
                &["1", "5", "2"],
                &["2", "3", "9"],
                &["3", "8", "4"],
                &["4", "1", "7"],
            ],
        );
        let m = correlation_matrix(&ds).unwrap();
        for i in 0..3 {
            assert!((m.matrix[i][i] - 1.0).abs() < 1e-9);
            for j in 0..3 {
                assert!((m.matrix[i][j] - m.matrix[j][i]).abs() < 1e-9);
                assert!(m.matrix[i][j].is_finite());
            }
        }
    }

    #[test]
    fn test_text_column_is_excluded() {
        let ds = dataset(
            &["a", "label", "b"],
            &[&["1", "x", "4"], &["2", "y", "5"], &["3", "z", "6"]],
        );
        let m = correlation_matrix(&ds).unwrap();
        assert_eq!(m.headers, vec!["a", "b"]);
    }

    #[test]
    fn test_single_blank_cell_disqualifies_column() {
        let ds = dataset(
            &["a", "b"],
            &[&["1", "2"], &["", "4"], &["3", "6"]],
        );
        // Column "a" has a blank cell, leaving only one numeric column.
        assert!(correlation_matrix(&ds).is_none());
    }

    #[test]
    fn test_zero_variance_column_correlates_to_zero() {
        let ds = dataset(
            &["a", "flat"],
            &[&["1", "5"], &["2", "5"], &["3", "5"]],
        );
        let m = correlation_matrix(&ds).unwrap();
        assert_eq!(m.matrix[0][1], 0.0);
        assert_eq!(m.matrix[1][1], 1.0);
    }
}
