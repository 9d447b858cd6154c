//! Time-series output structures for projections

use serde::{Deserialize, Serialize};

use crate::rates::inflation_factor;

/// A single month's snapshot of a projected plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRow {
    // Timing
    pub month: u32,

    // Balances
    pub balance: f64,
    pub real_balance: f64,
    pub baseline_balance: f64,

    // Cumulative flows
    pub contributed: f64,
    pub interest: f64,
}

impl MonthRow {
    /// The month-0 starting snapshot: everything equals the initial balance
    /// and no interest has been earned yet
    pub fn starting(initial_balance: f64) -> Self {
        Self {
            month: 0,
            balance: initial_balance,
            real_balance: initial_balance,
            baseline_balance: initial_balance,
            contributed: initial_balance,
            interest: 0.0,
        }
    }
}

/// Complete projection result for one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Plan identifier
    pub plan_id: u32,

    /// Monthly return rate the projection ran with
    pub monthly_rate: f64,

    /// Monthly inflation rate the projection ran with
    pub monthly_inflation: f64,

    /// Month-by-month rows, month 0 first, strictly increasing
    pub rows: Vec<MonthRow>,
}

impl ProjectionResult {
    pub fn new(plan_id: u32, monthly_rate: f64, monthly_inflation: f64) -> Self {
        Self {
            plan_id,
            monthly_rate,
            monthly_inflation,
            rows: Vec::new(),
        }
    }

    /// Add a month row
    pub fn add_row(&mut self, row: MonthRow) {
        self.rows.push(row);
    }

    /// Final balance of the projection (0 for an empty projection)
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.balance).unwrap_or(0.0)
    }

    /// Get summary statistics at the horizon
    pub fn summary(&self) -> ProjectionSummary {
        let last = match self.rows.last() {
            Some(row) => row,
            None => return ProjectionSummary::default(),
        };

        let deflator = inflation_factor(self.monthly_inflation, last.month);

        ProjectionSummary {
            months: last.month,
            final_balance: last.balance,
            final_real_balance: last.real_balance,
            final_baseline_balance: last.baseline_balance,
            contribution_benefit: last.balance - last.baseline_balance,
            total_contributed: last.contributed,
            total_interest: last.balance - last.contributed,
            real_interest: last.real_balance - last.contributed / deflator,
        }
    }
}

/// Summary statistics for a projection at its horizon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub final_balance: f64,
    pub final_real_balance: f64,
    pub final_baseline_balance: f64,
    /// How much better the plan ends versus never contributing
    pub contribution_benefit: f64,
    pub total_contributed: f64,
    pub total_interest: f64,
    /// Interest in base-date money: real final balance minus deflated contributions
    pub real_interest: f64,
}
