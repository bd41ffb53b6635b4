use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;

use crate::data::loader::{DatasetLoader, FileHandle};
use crate::data::model::TabularDataset;

use super::model::{NodePayload, PipelineGraphSnapshot};
use super::producer::{Materialization, rule_for};

// ---------------------------------------------------------------------------
// Upstream resolution – first recognized inbound producer wins
// ---------------------------------------------------------------------------

/// Outcome of resolving the single upstream dataset for a node.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamData {
    /// No inbound edge leads to a recognized producer.
    NoUpstream,
    /// Rows available immediately.
    Materialized(TabularDataset),
    /// Rows require an asynchronous full parse; headers are already known.
    NeedsAsyncLoad {
        handle: FileHandle,
        headers: Vec<String>,
    },
}

/// Walk the inbound edges of `target` in stored order and return the first
/// edge whose source is a recognized producer with a matching payload shape.
///
/// This is first-match-wins: later inbound producers are ignored, never
/// merged. Dangling edges, removed nodes, non-producer kinds, and payloads
/// that don't match their kind's rule are all skipped silently.
pub fn resolve_upstream(snapshot: &PipelineGraphSnapshot, target: &str) -> UpstreamData {
    for edge in snapshot.inbound_edges(target) {
        let Some(node) = snapshot.node(&edge.source) else {
            log::debug!("edge into {target} from missing node {}", edge.source);
            continue;
        };
        let Some(rule) = rule_for(node.kind) else {
            continue;
        };
        match (rule.materialization, &node.payload) {
            (Materialization::AsyncFile, NodePayload::RawFile { handle, headers }) => {
                return UpstreamData::NeedsAsyncLoad {
                    handle: handle.clone(),
                    headers: headers.clone(),
                };
            }
            (Materialization::Eager, NodePayload::Table { headers, rows }) => {
                return UpstreamData::Materialized(TabularDataset::new(
                    headers.clone(),
                    rows.clone(),
                ));
            }
            (Materialization::Eager, NodePayload::Model { table: Some(t) }) => {
                return UpstreamData::Materialized(t.clone());
            }
            _ => {
                log::debug!(
                    "node {} ({:?}) payload doesn't match its producer rule, skipping",
                    node.id,
                    node.kind
                );
            }
        }
    }
    UpstreamData::NoUpstream
}

/// Await full rows for a descriptor. `NoUpstream` maps to `Ok(None)`; loader
/// failures propagate so the caller can surface them.
pub async fn materialize<L: DatasetLoader>(
    upstream: UpstreamData,
    loader: &L,
) -> Result<Option<TabularDataset>> {
    match upstream {
        UpstreamData::NoUpstream => Ok(None),
        UpstreamData::Materialized(ds) => Ok(Some(ds)),
        UpstreamData::NeedsAsyncLoad { handle, .. } => {
            let ds = loader.parse_full(&handle).await?;
            Ok(Some(ds))
        }
    }
}

// ---------------------------------------------------------------------------
// Generation gate – last-triggered, last-committed arbitration
// ---------------------------------------------------------------------------

/// Token identifying one resolution attempt. Monotonically increasing per
/// gate; a higher token always supersedes a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Arbitrates overlapping asynchronous materializations for one node.
///
/// Every resolution attempt calls [`begin`](GenerationGate::begin) before
/// awaiting; on arrival the result may commit only if its generation is newer
/// than the last committed one. A slow parse finishing after a newer attempt
/// is discarded silently — supersession, not failure.
#[derive(Debug, Default)]
pub struct GenerationGate {
    issued: AtomicU64,
    committed: AtomicU64,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation token.
    pub fn begin(&self) -> Generation {
        Generation(self.issued.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Commit a finished attempt. Returns `false` when a newer generation has
    /// already committed (or this one already did), in which case the caller
    /// must discard the result.
    pub fn try_commit(&self, generation: Generation) -> bool {
        let mut current = self.committed.load(Ordering::Acquire);
        loop {
            if generation.0 <= current {
                log::debug!("discarding stale generation {generation:?}");
                return false;
            }
            match self.committed.compare_exchange(
                current,
                generation.0,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(seen) => current = seen,
            }
        }
    }
}
