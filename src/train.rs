use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// ModelTrainingService wire schema – accepted verbatim
// ---------------------------------------------------------------------------

/// 2D embedding attached to clustering responses when the service also ran
/// PCA over the feature matrix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PcaData {
    pub coords: Vec<Vec<f64>>,
    pub centroids: Vec<Vec<f64>>,
    pub variance_ratio: f64,
}

impl PcaData {
    /// First two components of each row; rows with fewer are dropped.
    pub fn point_coords(&self) -> Vec<[f64; 2]> {
        first_two(&self.coords)
    }

    /// First two components of each centroid; short rows are dropped.
    pub fn centroid_coords(&self) -> Vec<[f64; 2]> {
        first_two(&self.centroids)
    }
}

fn first_two(rows: &[Vec<f64>]) -> Vec<[f64; 2]> {
    rows.iter()
        .filter_map(|r| Some([*r.first()?, *r.get(1)?]))
        .collect()
}

/// Response of the remote training service. Field names follow the wire
/// format; `cluster_representatives` is an alias the service uses for
/// algorithms without true centers (e.g. DBSCAN cluster means).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrainingResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub cluster_labels: Option<Vec<i64>>,
    #[serde(default)]
    pub cluster_sizes: Option<Vec<u64>>,
    #[serde(default, alias = "cluster_representatives")]
    pub cluster_centers: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub n_clusters: Option<u32>,
    #[serde(default)]
    pub n_noise: Option<u64>,
    #[serde(default)]
    pub pca_data: Option<PcaData>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainError {
    #[error("training service error: {0}")]
    Service(String),
}

// ---------------------------------------------------------------------------
// Per-node model state – last good result survives failed retrains
// ---------------------------------------------------------------------------

/// Holds the last successful training result for one model node. A failed
/// retrain surfaces its error string without touching the committed result.
#[derive(Debug, Clone, Default)]
pub struct NodeModelState {
    last_good: Option<TrainingResponse>,
}

impl NodeModelState {
    /// Apply a service response. On success the response commits and is
    /// returned; on failure the previous result stays in place and the
    /// service's error string comes back as [`TrainError::Service`].
    pub fn ingest(&mut self, response: TrainingResponse) -> Result<&TrainingResponse, TrainError> {
        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "unspecified training failure".into());
            log::warn!("training failed: {message}");
            return Err(TrainError::Service(message));
        }
        Ok(self.last_good.insert(response))
    }

    /// The last committed result, if any training ever succeeded.
    pub fn last_good(&self) -> Option<&TrainingResponse> {
        self.last_good.as_ref()
    }
}
