//! Wealth Planner - High-performance projection engine for recurring-contribution investment plans
//!
//! This library provides:
//! - Month-by-month wealth projections with contribution and baseline tracking
//! - Inflation-adjusted (real) balance series
//! - Time-to-target solving with closed-form and iterative paths
//! - Required-contribution solving over a fixed horizon
//! - Batch projection framework for plan files

pub mod goals;
pub mod plan;
pub mod projection;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use goals::{ContributionOutcome, HorizonOutcome, UnreachableReason};
pub use plan::Plan;
pub use projection::{MonthRow, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use rates::RateBasis;
pub use scenario::ScenarioRunner;
