//! End-to-end pipeline tests: resolve an upstream file source, materialize it
//! asynchronously, and derive chart views — including the overlapping-parse
//! race where only the newest generation may commit.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

use pipevis::data::loader::{CsvLoader, DatasetLoader, FileHandle};
use pipevis::data::model::TabularDataset;
use pipevis::graph::model::{
    NodeKind, NodePayload, PipelineEdge, PipelineGraphSnapshot, PipelineNode,
};
use pipevis::graph::resolver::{GenerationGate, UpstreamData, materialize, resolve_upstream};
use pipevis::view::{ChartSelection, DerivedView, derive_view};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_csv(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("pipevis-pipeline-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

fn file_source_snapshot(path: PathBuf) -> PipelineGraphSnapshot {
    let handle = FileHandle::new(path);
    PipelineGraphSnapshot {
        nodes: vec![
            PipelineNode {
                id: "src".into(),
                kind: NodeKind::FileSource,
                payload: NodePayload::RawFile {
                    handle,
                    headers: vec!["city".into(), "price".into()],
                },
            },
            PipelineNode {
                id: "chart".into(),
                kind: NodeKind::ChartView,
                payload: NodePayload::Empty,
            },
        ],
        edges: vec![PipelineEdge {
            source: "src".into(),
            target: "chart".into(),
        }],
    }
}

#[tokio::test]
async fn test_file_source_resolves_and_charts() {
    init_logging();
    let path = write_csv(
        "prices.csv",
        "city,price\nOslo,100\nOslo,250\nBergen,40\n",
    );
    let snapshot = file_source_snapshot(path);

    let upstream = resolve_upstream(&snapshot, "chart");
    assert!(matches!(upstream, UpstreamData::NeedsAsyncLoad { .. }));

    let dataset = materialize(upstream, &CsvLoader)
        .await
        .unwrap()
        .expect("file source must yield a table");
    assert_eq!(dataset.len(), 3);

    let bars = derive_view(
        &dataset,
        &ChartSelection::Bars { col: "city".into() },
        None,
    );
    match bars {
        DerivedView::Bars(b) => {
            assert_eq!(b.bars[0].label, "Oslo");
            assert_eq!(b.bars[0].count, 2);
        }
        other => panic!("expected bars, got {other:?}"),
    }

    let hist = derive_view(
        &dataset,
        &ChartSelection::Histogram {
            col: "price".into(),
        },
        None,
    );
    match hist {
        DerivedView::Histogram(bins) => {
            assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        }
        other => panic!("expected histogram, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Stale-result suppression
// ---------------------------------------------------------------------------

/// Loader whose parses take a configurable time and return a one-column
/// dataset naming the loaded "version", so a test can see which parse won.
struct SlowLoader {
    delay: Duration,
    version: &'static str,
}

impl DatasetLoader for SlowLoader {
    async fn parse_full(&self, _handle: &FileHandle) -> Result<TabularDataset> {
        tokio::time::sleep(self.delay).await;
        Ok(TabularDataset::new(vec![self.version.to_string()], vec![]))
    }
}

#[tokio::test]
async fn test_newest_generation_wins_even_when_older_parse_finishes_later() {
    init_logging();
    let gate = GenerationGate::new();
    let committed: Mutex<Option<String>> = Mutex::new(None);
    let handle = FileHandle::new("unused.csv");

    // First attempt starts first but parses slowly; the second starts later,
    // parses fast, and arrives first.
    let slow = SlowLoader {
        delay: Duration::from_millis(80),
        version: "stale",
    };
    let fast = SlowLoader {
        delay: Duration::from_millis(5),
        version: "fresh",
    };

    let g1 = gate.begin();
    let attempt1 = async {
        let ds = slow.parse_full(&handle).await.unwrap();
        if gate.try_commit(g1) {
            *committed.lock().unwrap() = Some(ds.headers[0].clone());
        }
    };
    let g2 = gate.begin();
    let attempt2 = async {
        let ds = fast.parse_full(&handle).await.unwrap();
        if gate.try_commit(g2) {
            *committed.lock().unwrap() = Some(ds.headers[0].clone());
        }
    };

    tokio::join!(attempt1, attempt2);

    // The slow, older parse finished last but must not have overwritten the
    // newer committed result.
    assert_eq!(committed.lock().unwrap().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn test_resolver_misses_never_error() {
    init_logging();
    let snapshot = PipelineGraphSnapshot {
        nodes: vec![],
        edges: vec![PipelineEdge {
            source: "gone".into(),
            target: "chart".into(),
        }],
    };
    let upstream = resolve_upstream(&snapshot, "chart");
    assert_eq!(upstream, UpstreamData::NoUpstream);
    assert_eq!(materialize(upstream, &CsvLoader).await.unwrap(), None);
}
