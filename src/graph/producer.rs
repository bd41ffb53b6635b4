use super::model::NodeKind;

// ---------------------------------------------------------------------------
// Producer rules – which kinds feed data downstream, and how
// ---------------------------------------------------------------------------

/// How a producer's rows become available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialization {
    /// Rows are already held inline in the node payload.
    Eager,
    /// Rows require an asynchronous full-file parse.
    AsyncFile,
}

/// One row of the producer table.
#[derive(Debug, Clone, Copy)]
pub struct ProducerRule {
    pub kind: NodeKind,
    pub materialization: Materialization,
}

/// Single source of truth for which node kinds act as data producers.
/// Kinds absent from this table (chart and table views) are skipped during
/// upstream resolution.
pub const PRODUCER_RULES: &[ProducerRule] = &[
    ProducerRule { kind: NodeKind::FileSource, materialization: Materialization::AsyncFile },
    ProducerRule { kind: NodeKind::DatabaseSource, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::Cleaner, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::Encoder, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::Normalizer, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::FeatureSelector, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::DimensionalityReducer, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::TypeConverter, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::ClusteringModel, materialization: Materialization::Eager },
    ProducerRule { kind: NodeKind::RegressionModel, materialization: Materialization::Eager },
];

/// Look up the producer rule for a kind; `None` means "not a producer".
pub fn rule_for(kind: NodeKind) -> Option<&'static ProducerRule> {
    PRODUCER_RULES.iter().find(|r| r.kind == kind)
}
