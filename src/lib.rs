//! creative-board: headless interaction core for ad-creative dashboards.
//!
//! This crate owns the aggregation pipeline, the chart coordinate mappings,
//! the pointer hit-testing and the tooltip state machine behind two
//! interactive charts: a stacked daily-profit bar chart and a four-quadrant
//! performance matrix. Rendering, ingestion and persistence stay with the
//! host application.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{BoardEngine, BoardEngineConfig};
pub use error::{BoardError, BoardResult};
