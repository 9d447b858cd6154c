//! Plan data structures for projection and goal solving

use serde::{Deserialize, Serialize};

use crate::rates::{monthly_rate, RateBasis};

/// A single investment plan: starting capital, a recurring monthly
/// contribution, and the market assumptions to project it under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identifier
    #[serde(default)]
    pub plan_id: u32,

    /// Balance already invested at month 0 (PV)
    pub initial_balance: f64,

    /// Contribution added at the end of each month (PMT)
    pub monthly_contribution: f64,

    /// Expected annual return, as a percentage (10 means 10%/year)
    pub annual_return_pct: f64,

    /// Projection horizon in months
    pub horizon_months: u32,

    /// Expected annual inflation, as a percentage
    #[serde(default)]
    pub annual_inflation_pct: f64,

    /// Balance the plan is aiming for, when goal solving applies
    #[serde(default)]
    pub target_balance: Option<f64>,
}

impl Plan {
    /// Create a plan with no inflation adjustment and no target
    pub fn new(
        plan_id: u32,
        initial_balance: f64,
        monthly_contribution: f64,
        annual_return_pct: f64,
        horizon_months: u32,
    ) -> Self {
        Self::with_inflation(
            plan_id,
            initial_balance,
            monthly_contribution,
            annual_return_pct,
            horizon_months,
            0.0,
        )
    }

    /// Create a plan with an inflation assumption
    pub fn with_inflation(
        plan_id: u32,
        initial_balance: f64,
        monthly_contribution: f64,
        annual_return_pct: f64,
        horizon_months: u32,
        annual_inflation_pct: f64,
    ) -> Self {
        Self {
            plan_id,
            initial_balance,
            monthly_contribution,
            annual_return_pct,
            horizon_months,
            annual_inflation_pct,
            target_balance: None,
        }
    }

    /// Whether the plan has any growth mechanism at all
    ///
    /// A balance below its target can only ever reach it through
    /// contributions or a positive return. Orchestration layers gate
    /// goal solving on this; the solvers also report it themselves.
    pub fn can_grow(&self) -> bool {
        self.monthly_contribution > 0.0 || self.annual_return_pct > 0.0
    }

    /// Monthly return rate under the given conversion basis
    pub fn monthly_return_rate(&self, basis: RateBasis) -> f64 {
        monthly_rate(self.annual_return_pct, basis)
    }

    /// Monthly inflation rate under the given conversion basis
    pub fn monthly_inflation_rate(&self, basis: RateBasis) -> f64 {
        monthly_rate(self.annual_inflation_pct, basis)
    }

    /// Whole years in the projection horizon
    pub fn horizon_years(&self) -> u32 {
        self.horizon_months / 12
    }
}
