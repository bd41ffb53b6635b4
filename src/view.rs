use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::cluster::{ClusterProjection, TrainedClusterModel, custom_axis_view, projected_view};
use crate::data::model::TabularDataset;
use crate::stats::{
    Bin, CategoryBars, CorrelationMatrix, ScatterSeries, category_bar_chart, correlation_matrix,
    histogram, scatter_series,
};
use crate::train::PcaData;

// ---------------------------------------------------------------------------
// Derived-view pipeline: (dataset, selections) -> DerivedView
// ---------------------------------------------------------------------------

/// What the user picked for a chart node. Everything needed to recompute the
/// view is in here plus the resolved dataset and, for cluster charts, the
/// model context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartSelection {
    Scatter { x_col: String, y_col: String },
    Histogram { col: String },
    Bars { col: String },
    Correlation,
    /// Externally embedded 2D view (PCA coordinates from the model node).
    ClusterProjected,
    ClusterCustomAxis { x_col: String, y_col: String },
}

/// Clustering context published by an upstream model node.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelContext {
    pub trained: TrainedClusterModel,
    pub pca: Option<PcaData>,
}

/// A fully computed, renderable view. `Empty` covers every
/// zero-eligible-data case; callers render a placeholder for it.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivedView {
    Empty,
    Scatter(ScatterSeries),
    Histogram(Vec<Bin>),
    Bars(CategoryBars),
    Correlation(CorrelationMatrix),
    Cluster(ClusterProjection),
}

/// Compute the derived view for one selection. Pure: same inputs, same view.
pub fn derive_view(
    dataset: &TabularDataset,
    selection: &ChartSelection,
    model: Option<&ModelContext>,
) -> DerivedView {
    match selection {
        ChartSelection::Scatter { x_col, y_col } => scatter_series(dataset, x_col, y_col)
            .map(DerivedView::Scatter)
            .unwrap_or(DerivedView::Empty),
        ChartSelection::Histogram { col } => histogram(dataset, col)
            .map(DerivedView::Histogram)
            .unwrap_or(DerivedView::Empty),
        ChartSelection::Bars { col } => category_bar_chart(dataset, col)
            .map(DerivedView::Bars)
            .unwrap_or(DerivedView::Empty),
        ChartSelection::Correlation => correlation_matrix(dataset)
            .map(DerivedView::Correlation)
            .unwrap_or(DerivedView::Empty),
        ChartSelection::ClusterProjected => match model.and_then(|m| m.pca.as_ref()) {
            Some(pca) => DerivedView::Cluster(projected_view(
                dataset,
                &pca.point_coords(),
                &pca.centroid_coords(),
                Some(pca.variance_ratio),
            )),
            None => DerivedView::Empty,
        },
        ChartSelection::ClusterCustomAxis { x_col, y_col } => match model {
            Some(m) => DerivedView::Cluster(custom_axis_view(dataset, x_col, y_col, &m.trained)),
            None => DerivedView::Empty,
        },
    }
}

// ---------------------------------------------------------------------------
// Memoization – hash of all inputs keys the cache
// ---------------------------------------------------------------------------

/// 64-bit fingerprint over every input that feeds `derive_view`, plus the
/// node id so two nodes with equal datasets don't collide in user-facing
/// invalidation.
pub fn view_fingerprint(
    dataset: &TabularDataset,
    node_id: &str,
    selection: &ChartSelection,
    model: Option<&ModelContext>,
) -> u64 {
    let mut h = DefaultHasher::new();
    node_id.hash(&mut h);
    selection.hash(&mut h);
    dataset.headers.hash(&mut h);
    dataset.rows.hash(&mut h);
    if let Some(m) = model {
        m.trained.feature_columns.hash(&mut h);
        hash_matrix(&mut h, &m.trained.centers);
        if let Some(pca) = &m.pca {
            hash_matrix(&mut h, &pca.coords);
            hash_matrix(&mut h, &pca.centroids);
            pca.variance_ratio.to_bits().hash(&mut h);
        }
    }
    h.finish()
}

fn hash_matrix(h: &mut DefaultHasher, rows: &[Vec<f64>]) {
    rows.len().hash(h);
    for row in rows {
        for v in row {
            v.to_bits().hash(h);
        }
    }
}

/// Caches computed views keyed on their input fingerprint. Recomputation is
/// caller-triggered: present the current snapshot inputs and the cache either
/// replays the stored view or computes a fresh one.
#[derive(Debug, Default)]
pub struct ViewCache {
    entries: HashMap<u64, Arc<DerivedView>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        dataset: &TabularDataset,
        node_id: &str,
        selection: &ChartSelection,
        model: Option<&ModelContext>,
    ) -> Arc<DerivedView> {
        let key = view_fingerprint(dataset, node_id, selection, model);
        if let Some(view) = self.entries.get(&key) {
            return Arc::clone(view);
        }
        let view = Arc::new(derive_view(dataset, selection, model));
        self.entries.insert(key, Arc::clone(&view));
        view
    }

    /// Drop everything (e.g. when the palette or chart theme changes).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
