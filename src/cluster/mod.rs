/// Cluster visualization: 2D point/centroid sets for either an externally
/// projected embedding (PCA coordinates from the training service) or two
/// user-chosen feature columns with centroid back-projection.
pub mod projection;

pub use projection::{
    CLUSTER_LABEL_COLUMN, Centroid, ClusterPoint, ClusterProjection, TrainedClusterModel,
    color_for_cluster, custom_axis_view, projected_view,
};
