//! Projection engine for single and multi-plan projections

mod state;
mod engine;
mod series;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use series::{MonthRow, ProjectionResult, ProjectionSummary};
