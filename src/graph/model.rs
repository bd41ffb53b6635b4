use crate::data::loader::FileHandle;
use crate::data::model::{Row, TabularDataset};

// ---------------------------------------------------------------------------
// Node kinds – the closed set of pipeline node categories
// ---------------------------------------------------------------------------

/// Every node category the editor can place on the canvas. Producer kinds
/// supply data downstream; view kinds only consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FileSource,
    DatabaseSource,
    Cleaner,
    Encoder,
    Normalizer,
    FeatureSelector,
    DimensionalityReducer,
    TypeConverter,
    ClusteringModel,
    RegressionModel,
    // Pure consumers: never resolve as an upstream producer.
    ChartView,
    TableView,
}

// ---------------------------------------------------------------------------
// Node payload – kind-specific data slot
// ---------------------------------------------------------------------------

/// What a node currently holds. The producer-rule table decides which shape
/// a given kind is expected to carry; a mismatch makes the node unresolvable
/// rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum NodePayload {
    /// File-source node: headers are known from a preview parse, rows need a
    /// full asynchronous parse.
    RawFile {
        handle: FileHandle,
        headers: Vec<String>,
    },
    /// Inline table output (database sources and transform nodes).
    Table { headers: Vec<String>, rows: Vec<Row> },
    /// Model-result holder republishing the table it was trained on.
    Model { table: Option<TabularDataset> },
    /// Nothing yet (freshly placed node).
    Empty,
}

// ---------------------------------------------------------------------------
// Graph snapshot
// ---------------------------------------------------------------------------

pub type NodeId = String;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub payload: NodePayload,
}

/// Directed edge; multiple edges may target one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Immutable view of the whole pipeline, handed in by the editor on every
/// recomputation. Resolution never mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineGraphSnapshot {
    pub nodes: Vec<PipelineNode>,
    pub edges: Vec<PipelineEdge>,
}

impl PipelineGraphSnapshot {
    /// Node lookup by id.
    pub fn node(&self, id: &str) -> Option<&PipelineNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Inbound edges of `target`, in stored order.
    pub fn inbound_edges<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a PipelineEdge> {
        self.edges.iter().filter(move |e| e.target == target)
    }
}
