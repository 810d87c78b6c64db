mod engine;
mod engine_config;
mod geometry;
mod outcome;

pub use engine::BoardEngine;
pub use engine_config::{BoardEngineConfig, ChartKind};
pub use geometry::{build_matrix_geometry, build_stacked_geometry};
pub use outcome::{ActivationHandler, PointerOutcome, TooltipContent};
