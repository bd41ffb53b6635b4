/// Data layer: the canonical tabular shape and file loading.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  async parse file → TabularDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ TabularDataset  │  headers + rows of typed cells
///   └────────────────┘
///        │
///        ▼
///   stats / cluster / chart consumers
/// ```
pub mod loader;
pub mod model;
