//! Goal-seeking solvers built on the projection engine
//!
//! Answers the two planning questions a projection alone cannot: how long
//! until a balance reaches a target, and how much to deposit each month to
//! reach it within a fixed horizon.

use serde::Serialize;
use thiserror::Error;

use crate::projection::{ProjectionResult, ProjectionSummary};

mod contribution;
mod horizon;

pub use contribution::{contribution_to_target, required_monthly_contribution, ContributionSolve};
pub use horizon::{
    months_to_target, months_to_target_iterative, time_to_target, time_to_target_from,
};

/// Longest horizon a solver will report, in months (100 years)
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// Why a target balance cannot be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreachableReason {
    /// No deposits and no positive return, the balance can never move
    #[error("balance cannot grow: no contributions and no positive return")]
    NoGrowth,

    /// The target lies beyond the maximum supported horizon
    #[error("target not reached within {} months", MAX_HORIZON_MONTHS)]
    BeyondMaxHorizon,

    /// A contribution solve was asked over a zero-length horizon
    #[error("no months remain to contribute in")]
    NoTimeRemaining,

    /// The arithmetic produced a non-finite result
    #[error("solver produced a non-finite result")]
    NotComputable,
}

/// Future value of a balance with level end-of-month deposits
///
/// Zero rates collapse to simple accumulation.
pub fn future_value(pv: f64, pmt: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate.abs() < 1e-10 {
        return pv + pmt * f64::from(months);
    }
    let growth = (1.0 + monthly_rate).powf(f64::from(months));
    pv * growth + pmt * (growth - 1.0) / monthly_rate
}

/// Result of a time-to-target solve
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HorizonOutcome {
    /// The target is reachable and the projection shows the path to it
    Reached {
        /// Whole months until the balance first meets the target
        months: u32,
        /// `months` split into whole years
        years: u32,
        /// Months left over after the whole years
        remaining_months: u32,
        /// Calendar date the target is met, if date arithmetic stays in range
        target_date: Option<chrono::NaiveDate>,
        projection: ProjectionResult,
        summary: ProjectionSummary,
    },
    /// The target cannot be reached
    Unreachable { reason: UnreachableReason },
}

/// Result of a required-contribution solve
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ContributionOutcome {
    /// A positive monthly deposit closes the gap
    Required {
        monthly_contribution: f64,
        projection: ProjectionResult,
        summary: ProjectionSummary,
    },
    /// Growth on the current balance reaches the target without deposits
    NotNeeded {
        projection: ProjectionResult,
        summary: ProjectionSummary,
    },
    /// No deposit level can reach the target in time
    Unreachable { reason: UnreachableReason },
}
