use crate::data::model::TabularDataset;

// ---------------------------------------------------------------------------
// Scatter series – paired numeric columns with data-driven domains
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub points: Vec<(f64, f64)>,
    /// `[min(xs), max(xs)]`
    pub x_domain: [f64; 2],
    /// `[min(ys), max(ys)]`
    pub y_domain: [f64; 2],
}

/// Pair up two columns as numeric points. Rows where either cell fails to
/// parse as a finite number are dropped; `None` when nothing survives.
pub fn scatter_series(
    dataset: &TabularDataset,
    x_col: &str,
    y_col: &str,
) -> Option<ScatterSeries> {
    let xi = dataset.column_index(x_col)?;
    let yi = dataset.column_index(y_col)?;

    let points: Vec<(f64, f64)> = dataset
        .rows
        .iter()
        .filter_map(|row| {
            let x = row.get(xi)?.as_f64()?;
            let y = row.get(yi)?.as_f64()?;
            Some((x, y))
        })
        .collect();

    if points.is_empty() {
        return None;
    }

    let mut x_domain = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y_domain = [f64::INFINITY, f64::NEG_INFINITY];
    for &(x, y) in &points {
        x_domain[0] = x_domain[0].min(x);
        x_domain[1] = x_domain[1].max(x);
        y_domain[0] = y_domain[0].min(y);
        y_domain[1] = y_domain[1].max(y);
    }

    Some(ScatterSeries {
        points,
        x_domain,
        y_domain,
    })
}
