//! Core projection engine for monthly wealth accumulation projections

use crate::plan::Plan;
use crate::rates::{self, RateBasis};
use super::series::{MonthRow, ProjectionResult};
use super::state::ProjectionState;

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Override the plan horizon with a fixed month count
    /// If Some, projects this many months regardless of the plan
    pub horizon_override: Option<u32>,

    /// Override the plan contribution with a fixed monthly amount
    /// If Some, deposits this amount each month instead of the plan's
    pub contribution_override: Option<f64>,

    /// Annual-to-monthly rate conversion basis
    pub rate_basis: RateBasis,
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run projection for a single plan
    ///
    /// Hostile inputs are clamped rather than rejected: negative or NaN
    /// balances and contributions project as zero, so the output series is
    /// always well-formed.
    pub fn project_plan(&self, plan: &Plan) -> ProjectionResult {
        let initial_balance = plan.initial_balance.max(0.0);
        let contribution = self
            .config
            .contribution_override
            .unwrap_or(plan.monthly_contribution)
            .max(0.0);
        let months = self.config.horizon_override.unwrap_or(plan.horizon_months);

        let monthly_return = plan.monthly_return_rate(self.config.rate_basis);
        let monthly_inflation = plan.monthly_inflation_rate(self.config.rate_basis);

        log::debug!(
            "projecting plan {}: {} months at monthly rate {:.6}",
            plan.plan_id,
            months,
            monthly_return
        );

        let mut result = ProjectionResult::new(plan.plan_id, monthly_return, monthly_inflation);
        let mut state = ProjectionState::new(initial_balance);

        // Month 0 snapshot before any growth or deposits
        result.add_row(MonthRow::starting(initial_balance));

        for _month in 1..=months {
            state.advance_month(monthly_return, contribution);
            result.add_row(self.snapshot(&state, monthly_inflation));
        }

        result
    }

    /// Record the state as an output row
    fn snapshot(&self, state: &ProjectionState, monthly_inflation: f64) -> MonthRow {
        MonthRow {
            month: state.month,
            balance: state.balance,
            real_balance: rates::deflate(state.balance, monthly_inflation, state.month),
            baseline_balance: state.baseline_balance,
            contributed: state.contributed,
            interest: state.interest(),
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::future_value;
    use approx::assert_relative_eq;

    fn test_plan() -> Plan {
        Plan::new(1, 10_000.0, 1_000.0, 10.0, 120)
    }

    #[test]
    fn test_row_count_includes_month_zero() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&test_plan());

        assert_eq!(result.rows.len(), 121);
        assert_eq!(result.rows[0].month, 0);
        assert_eq!(result.rows[120].month, 120);
    }

    #[test]
    fn test_ten_year_accumulation() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&test_plan());
        let last = result.rows.last().unwrap();

        // Closed-form annuity value at the effective monthly rate
        let r = rates::effective_monthly_rate(10.0);
        let expected = future_value(10_000.0, 1_000.0, r, 120);
        assert_relative_eq!(last.balance, expected, max_relative = 1e-9);
        assert!(
            (last.balance - 225_801.28).abs() < 1.0,
            "final balance {}",
            last.balance
        );

        // 120 deposits of 1000 on top of the opening 10000
        assert_eq!(last.contributed, 130_000.0);
        assert!(
            (last.interest - (last.balance - 130_000.0)).abs() < 1e-9,
            "interest {}",
            last.interest
        );
    }

    #[test]
    fn test_fractional_deposits_total_exactly() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&Plan::new(1, 10_000.0, 0.1, 10.0, 120));
        let summary = result.summary();

        assert_eq!(result.rows.last().unwrap().contributed, 10_012.0);
        assert_eq!(summary.total_contributed, 10_012.0);
    }

    #[test]
    fn test_zero_horizon_yields_single_row() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&Plan::new(1, 5_000.0, 100.0, 8.0, 0));

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.final_balance(), 5_000.0);
    }

    #[test]
    fn test_baseline_matches_balance_without_contributions() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&Plan::new(1, 10_000.0, 0.0, 10.0, 60));

        for row in &result.rows {
            assert!(
                (row.balance - row.baseline_balance).abs() < 1e-9,
                "month {}: balance {} baseline {}",
                row.month,
                row.balance,
                row.baseline_balance
            );
        }
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&Plan::new(1, -5_000.0, -200.0, 10.0, 12));
        let last = result.rows.last().unwrap();

        assert_eq!(result.rows[0].balance, 0.0);
        assert_eq!(last.balance, 0.0);
        assert_eq!(last.contributed, 0.0);
    }

    #[test]
    fn test_negative_rate_floors_at_zero_growth() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&Plan::new(1, 10_000.0, 0.0, -5.0, 24));

        // Annual rate clamps to zero, so the balance holds flat
        assert_eq!(result.final_balance(), 10_000.0);
    }

    #[test]
    fn test_real_balance_deflated_by_inflation() {
        let engine = ProjectionEngine::default();
        let plan = Plan::with_inflation(1, 10_000.0, 500.0, 10.0, 60, 4.0);
        let result = engine.project_plan(&plan);
        let last = result.rows.last().unwrap();

        assert!(last.real_balance < last.balance);

        let monthly_inflation = rates::effective_monthly_rate(4.0);
        let expected = rates::deflate(last.balance, monthly_inflation, 60);
        assert_relative_eq!(last.real_balance, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_inflation_leaves_real_equal_nominal() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&test_plan());

        for row in &result.rows {
            assert_eq!(row.balance, row.real_balance);
        }
    }

    #[test]
    fn test_horizon_override() {
        let config = ProjectionConfig {
            horizon_override: Some(36),
            ..Default::default()
        };
        let engine = ProjectionEngine::new(config);
        let result = engine.project_plan(&test_plan());

        assert_eq!(result.rows.len(), 37);
    }

    #[test]
    fn test_contribution_override() {
        let config = ProjectionConfig {
            contribution_override: Some(0.0),
            ..Default::default()
        };
        let engine = ProjectionEngine::new(config);
        let result = engine.project_plan(&test_plan());
        let last = result.rows.last().unwrap();

        assert_eq!(last.contributed, 10_000.0);
        assert!((last.balance - last.baseline_balance).abs() < 1e-9);
    }

    #[test]
    fn test_nominal_basis_runs_hotter() {
        let effective = ProjectionEngine::default().project_plan(&test_plan());
        let nominal = ProjectionEngine::new(ProjectionConfig {
            rate_basis: RateBasis::Nominal,
            ..Default::default()
        })
        .project_plan(&test_plan());

        assert!(nominal.final_balance() > effective.final_balance());
    }

    #[test]
    fn test_balances_grow_monotonically() {
        let engine = ProjectionEngine::default();
        let result = engine.project_plan(&test_plan());

        for pair in result.rows.windows(2) {
            assert!(
                pair[1].balance > pair[0].balance,
                "month {} did not grow",
                pair[1].month
            );
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let engine = ProjectionEngine::default();
        let a = engine.project_plan(&test_plan());
        let b = engine.project_plan(&test_plan());

        assert_eq!(a.rows.len(), b.rows.len());
        for (ra, rb) in a.rows.iter().zip(b.rows.iter()) {
            assert_eq!(ra.balance, rb.balance);
        }
    }
}
