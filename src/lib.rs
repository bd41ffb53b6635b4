//! Data-resolution and chart-computation engine for a visual data-pipeline
//! editor.
//!
//! The editor lets a user wire data-transformation and modeling nodes into a
//! directed graph and attach charts to any step. This crate is the part with
//! actual semantics: resolving which upstream table a node operates on, and
//! turning that table plus user selections into renderable derived
//! structures. Rendering, node widgets, and model fitting live elsewhere.
//!
//! ```text
//!   PipelineGraphSnapshot ──▶ graph::resolver ──▶ TabularDataset
//!                                                      │
//!                              stats / cluster  ◀──────┘
//!                                     │
//!                                     ▼
//!                              DerivedView ──▶ chart geometry
//! ```
//!
//! Every computation is pure and snapshot-in, value-out; the only suspension
//! point is the asynchronous full parse of file-backed sources, arbitrated by
//! a generation gate so a slow parse never clobbers a newer state.

pub mod chart;
pub mod cluster;
pub mod color;
pub mod data;
pub mod graph;
pub mod stats;
pub mod train;
pub mod view;
