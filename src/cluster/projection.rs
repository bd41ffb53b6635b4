use crate::color::{PALETTE_SIZE, Rgb, cluster_color};
use crate::data::model::TabularDataset;

// ---------------------------------------------------------------------------
// 2D cluster projections – externally embedded or custom-axis
// ---------------------------------------------------------------------------

/// Column carrying per-row cluster assignments when the upstream model node
/// annotated its table.
pub const CLUSTER_LABEL_COLUMN: &str = "cluster_label";

/// One projected data point. `cluster` is signed because density-based
/// algorithms label noise rows `-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPoint {
    pub x: f64,
    pub y: f64,
    pub cluster: i64,
    /// Index of the source row in the original dataset.
    pub original_row: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub cluster: i64,
}

/// A renderable 2D view of a clustering result.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterProjection {
    pub points: Vec<ClusterPoint>,
    /// Empty when no centroid can be placed on the chosen axes.
    pub centroids: Vec<Centroid>,
    pub x_label: String,
    pub y_label: String,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    /// Total explained variance ratio, in projected mode only.
    pub variance_explained: Option<f64>,
}

/// Colour for a cluster index, noise included (`-1` wraps onto the palette).
pub fn color_for_cluster(cluster: i64) -> Rgb {
    cluster_color(cluster.rem_euclid(PALETTE_SIZE as i64) as usize)
}

/// The feature subset and per-cluster centers a clustering model was actually
/// trained on. Center rows are ordered like `feature_columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedClusterModel {
    pub feature_columns: Vec<String>,
    pub centers: Vec<Vec<f64>>,
}

// ---------------------------------------------------------------------------
// Projected mode: coordinates computed externally (e.g. PCA)
// ---------------------------------------------------------------------------

/// Build the view from an externally supplied 2D embedding: one coordinate
/// pair per row plus one per centroid. Cluster indices come from the
/// dataset's `cluster_label` column when present, else default to 0.
pub fn projected_view(
    dataset: &TabularDataset,
    coords: &[[f64; 2]],
    centroid_coords: &[[f64; 2]],
    variance_explained: Option<f64>,
) -> ClusterProjection {
    let labels = cluster_labels(dataset);

    let points: Vec<ClusterPoint> = coords
        .iter()
        .enumerate()
        .map(|(row, &[x, y])| ClusterPoint {
            x,
            y,
            cluster: labels.as_ref().and_then(|l| l.get(row).copied()).unwrap_or(0),
            original_row: row,
        })
        .collect();

    let centroids: Vec<Centroid> = centroid_coords
        .iter()
        .enumerate()
        .map(|(k, &[x, y])| Centroid {
            x,
            y,
            cluster: k as i64,
        })
        .collect();

    let (x_domain, y_domain) = expanded_bounds(&points, &centroids);
    ClusterProjection {
        points,
        centroids,
        x_label: "PC1".into(),
        y_label: "PC2".into(),
        x_domain,
        y_domain,
        variance_explained,
    }
}

// ---------------------------------------------------------------------------
// Custom-axis mode: two user-chosen feature columns
// ---------------------------------------------------------------------------

/// Project rows onto two chosen columns. Unparseable or non-finite cells
/// coerce to 0. Centroids back-project only when **both** axis columns belong
/// to the model's trained feature subset; otherwise they are omitted entirely
/// rather than defaulted or interpolated.
pub fn custom_axis_view(
    dataset: &TabularDataset,
    x_col: &str,
    y_col: &str,
    model: &TrainedClusterModel,
) -> ClusterProjection {
    let xi = dataset.column_index(x_col);
    let yi = dataset.column_index(y_col);
    let labels = cluster_labels(dataset);

    let points: Vec<ClusterPoint> = dataset
        .rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let coord = |col: Option<usize>| {
                col.and_then(|i| row.get(i))
                    .and_then(|c| c.as_f64())
                    .unwrap_or(0.0)
            };
            ClusterPoint {
                x: coord(xi),
                y: coord(yi),
                cluster: labels
                    .as_ref()
                    .and_then(|l| l.get(row_idx).copied())
                    .unwrap_or(0),
                original_row: row_idx,
            }
        })
        .collect();

    let fx = model.feature_columns.iter().position(|c| c == x_col);
    let fy = model.feature_columns.iter().position(|c| c == y_col);
    let centroids: Vec<Centroid> = match (fx, fy) {
        (Some(fx), Some(fy)) => model
            .centers
            .iter()
            .enumerate()
            .filter_map(|(k, center)| {
                Some(Centroid {
                    x: *center.get(fx)?,
                    y: *center.get(fy)?,
                    cluster: k as i64,
                })
            })
            .collect(),
        // Either axis sits outside the trained feature subset: no centroid
        // has a defined position there.
        _ => Vec::new(),
    };

    let (x_domain, y_domain) = expanded_bounds(&points, &centroids);
    ClusterProjection {
        points,
        centroids,
        x_label: x_col.into(),
        y_label: y_col.into(),
        x_domain,
        y_domain,
        variance_explained: None,
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Per-row cluster indices from the `cluster_label` column, when present.
fn cluster_labels(dataset: &TabularDataset) -> Option<Vec<i64>> {
    let cells = dataset.column(CLUSTER_LABEL_COLUMN)?;
    Some(
        cells
            .iter()
            .map(|c| c.as_f64().map(|v| v as i64).unwrap_or(0))
            .collect(),
    )
}

/// Min/max over points ∪ centroids, each axis expanded by 10% of its range
/// (flat 1.0 when the range is zero). An empty union falls back to `[-1, 1]`.
fn expanded_bounds(points: &[ClusterPoint], centroids: &[Centroid]) -> ([f64; 2], [f64; 2]) {
    let xs = points
        .iter()
        .map(|p| (p.x, p.y))
        .chain(centroids.iter().map(|c| (c.x, c.y)));

    let mut x = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y = [f64::INFINITY, f64::NEG_INFINITY];
    let mut any = false;
    for (px, py) in xs {
        any = true;
        x[0] = x[0].min(px);
        x[1] = x[1].max(px);
        y[0] = y[0].min(py);
        y[1] = y[1].max(py);
    }
    if !any {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }
    (expand(x), expand(y))
}

fn expand([lo, hi]: [f64; 2]) -> [f64; 2] {
    let range = hi - lo;
    let margin = if range == 0.0 { 1.0 } else { range * 0.1 };
    [lo - margin, hi + margin]
}
