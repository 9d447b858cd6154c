//! Required-contribution solver
//!
//! Inverts the accumulation recurrence to find the level monthly deposit
//! that lands a balance on a target at the end of a fixed horizon.

use crate::plan::Plan;
use crate::projection::{ProjectionConfig, ProjectionEngine};
use super::{ContributionOutcome, UnreachableReason};

/// Outcome of the closed-form contribution solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContributionSolve {
    /// Deposit this much each month to land on the target
    Amount(f64),
    /// Growth on the current balance covers the target by itself
    NotNeeded,
}

/// Level monthly deposit that reaches `target` after `months` months
///
/// Zero rates collapse to spreading the gap evenly across the horizon. A
/// negative solution means growth alone overshoots the target, reported as
/// [`ContributionSolve::NotNeeded`] rather than a deposit to skip.
pub fn required_monthly_contribution(
    pv: f64,
    monthly_rate: f64,
    target: f64,
    months: u32,
) -> Result<ContributionSolve, UnreachableReason> {
    // Handle edge cases
    if pv >= target {
        return Ok(ContributionSolve::NotNeeded);
    }
    if months == 0 {
        return Err(UnreachableReason::NoTimeRemaining);
    }

    let pmt = if monthly_rate.abs() < 1e-10 {
        (target - pv) / f64::from(months)
    } else {
        let growth = (1.0 + monthly_rate).powf(f64::from(months));
        (target - pv * growth) * monthly_rate / (growth - 1.0)
    };

    if !pmt.is_finite() {
        return Err(UnreachableReason::NotComputable);
    }
    if pmt < 0.0 {
        return Ok(ContributionSolve::NotNeeded);
    }

    Ok(ContributionSolve::Amount(pmt))
}

/// Solve the required contribution for a plan and package the result with a
/// projection over the plan horizon
///
/// When no deposit is needed the projection still runs, with contributions
/// pinned to zero, so the caller sees how the balance gets there on its own.
pub fn contribution_to_target(
    plan: &Plan,
    target: f64,
    config: &ProjectionConfig,
) -> ContributionOutcome {
    let pv = plan.initial_balance.max(0.0);
    let monthly_rate = plan.monthly_return_rate(config.rate_basis);
    let months = config.horizon_override.unwrap_or(plan.horizon_months);

    let solve = match required_monthly_contribution(pv, monthly_rate, target, months) {
        Ok(solve) => solve,
        Err(reason) => return ContributionOutcome::Unreachable { reason },
    };

    let contribution = match solve {
        ContributionSolve::Amount(pmt) => pmt,
        ContributionSolve::NotNeeded => 0.0,
    };
    let solved = ProjectionConfig {
        contribution_override: Some(contribution),
        ..config.clone()
    };
    let projection = ProjectionEngine::new(solved).project_plan(plan);
    let summary = projection.summary();

    match solve {
        ContributionSolve::Amount(pmt) => ContributionOutcome::Required {
            monthly_contribution: pmt,
            projection,
            summary,
        },
        ContributionSolve::NotNeeded => ContributionOutcome::NotNeeded {
            projection,
            summary,
        },
    }
}
