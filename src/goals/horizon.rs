//! Time-to-target solver
//!
//! Inverts the accumulation recurrence to find how many months of level
//! deposits carry a balance to a target.

use chrono::{Months, NaiveDate, Utc};

use crate::plan::Plan;
use crate::projection::{ProjectionConfig, ProjectionEngine};
use super::{HorizonOutcome, UnreachableReason, MAX_HORIZON_MONTHS};

/// Whole months until a balance first meets a target
///
/// Uses the closed-form inversion of the annuity future value when the log
/// arguments are well-defined. Otherwise falls back to walking the balance
/// forward month by month.
pub fn months_to_target(
    pv: f64,
    pmt: f64,
    monthly_rate: f64,
    target: f64,
) -> Result<u32, UnreachableReason> {
    // Handle edge cases
    if pv >= target {
        return Ok(0);
    }
    if pmt <= 0.0 && monthly_rate <= 0.0 {
        return Err(UnreachableReason::NoGrowth);
    }

    if monthly_rate > 0.0 {
        let numerator = target * monthly_rate + pmt;
        let denominator = pv * monthly_rate + pmt;

        if denominator > 0.0 && numerator / denominator > 0.0 {
            let n = (numerator / denominator).ln() / (1.0 + monthly_rate).ln();
            if !n.is_finite() {
                return Err(UnreachableReason::BeyondMaxHorizon);
            }
            let months = n.ceil();
            if months > f64::from(MAX_HORIZON_MONTHS) {
                return Err(UnreachableReason::BeyondMaxHorizon);
            }
            return Ok(months as u32);
        }

        // Log arguments out of domain, walk the balance instead
        log::debug!(
            "closed form unavailable for pv={} pmt={} rate={}, walking",
            pv,
            pmt,
            monthly_rate
        );
        return months_to_target_iterative(pv, pmt, monthly_rate, target);
    }

    if monthly_rate == 0.0 {
        // Deposits alone close the gap linearly (pmt > 0 here)
        let months = ((target - pv) / pmt).ceil();
        if !months.is_finite() || months > f64::from(MAX_HORIZON_MONTHS) {
            return Err(UnreachableReason::BeyondMaxHorizon);
        }
        return Ok(months as u32);
    }

    // Decaying balance with positive deposits, only the walk can decide
    months_to_target_iterative(pv, pmt, monthly_rate, target)
}

/// Fallback solver that walks the balance forward one month at a time
///
/// Covers rate and deposit combinations the closed form cannot express.
/// Stops at [`MAX_HORIZON_MONTHS`] if the target is still out of reach.
pub fn months_to_target_iterative(
    pv: f64,
    pmt: f64,
    monthly_rate: f64,
    target: f64,
) -> Result<u32, UnreachableReason> {
    if pv >= target {
        return Ok(0);
    }
    if pmt <= 0.0 && monthly_rate <= 0.0 {
        return Err(UnreachableReason::NoGrowth);
    }

    let mut balance = pv;
    for month in 1..=MAX_HORIZON_MONTHS {
        balance = balance * (1.0 + monthly_rate) + pmt;
        if balance >= target {
            return Ok(month);
        }
    }

    Err(UnreachableReason::BeyondMaxHorizon)
}

/// Solve time-to-target for a plan and package the result with a projection
///
/// The target date is measured from today. Use [`time_to_target_from`] to
/// pin the start date.
pub fn time_to_target(plan: &Plan, target: f64, config: &ProjectionConfig) -> HorizonOutcome {
    time_to_target_from(plan, target, config, Utc::now().date_naive())
}

/// Solve time-to-target for a plan, measuring dates from `today`
///
/// On success the projection is re-run over exactly the solved horizon, so
/// its final row shows the balance in the month the target is met.
pub fn time_to_target_from(
    plan: &Plan,
    target: f64,
    config: &ProjectionConfig,
    today: NaiveDate,
) -> HorizonOutcome {
    let pv = plan.initial_balance.max(0.0);
    let pmt = config
        .contribution_override
        .unwrap_or(plan.monthly_contribution)
        .max(0.0);
    let monthly_rate = plan.monthly_return_rate(config.rate_basis);

    let months = match months_to_target(pv, pmt, monthly_rate, target) {
        Ok(months) => months,
        Err(reason) => return HorizonOutcome::Unreachable { reason },
    };

    let solved = ProjectionConfig {
        horizon_override: Some(months),
        ..config.clone()
    };
    let projection = ProjectionEngine::new(solved).project_plan(plan);
    let summary = projection.summary();

    HorizonOutcome::Reached {
        months,
        years: months / 12,
        remaining_months: months % 12,
        target_date: today.checked_add_months(Months::new(months)),
        projection,
        summary,
    }
}
