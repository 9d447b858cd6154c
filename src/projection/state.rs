//! Projection state tracking for a single plan

/// State of a plan's balances at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (0 = starting snapshot)
    pub month: u32,

    /// Nominal balance including contributions
    pub balance: f64,

    /// Balance if no contributions were ever added (growth-only baseline)
    pub baseline_balance: f64,

    /// Balance the projection opened with at month 0
    pub initial_balance: f64,

    /// Cumulative amount paid in: initial balance plus contributions to date
    pub contributed: f64,
}

impl ProjectionState {
    /// Initialize state at month 0 from an already-clamped starting balance
    pub fn new(initial_balance: f64) -> Self {
        Self {
            month: 0,
            balance: initial_balance,
            baseline_balance: initial_balance,
            initial_balance,
            contributed: initial_balance,
        }
    }

    /// Advance one month: grow both balances, then add the end-of-month
    /// contribution to the nominal balance only
    pub fn advance_month(&mut self, monthly_rate: f64, contribution: f64) {
        self.month += 1;
        self.balance = self.balance * (1.0 + monthly_rate) + contribution;
        self.baseline_balance *= 1.0 + monthly_rate;
        // Product form keeps deposit totals exact
        self.contributed = self.initial_balance + contribution * f64::from(self.month);
    }

    /// Interest earned to date
    pub fn interest(&self) -> f64 {
        self.balance - self.contributed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ProjectionState::new(5_000.0);

        assert_eq!(state.month, 0);
        assert_eq!(state.balance, 5_000.0);
        assert_eq!(state.baseline_balance, 5_000.0);
        assert_eq!(state.contributed, 5_000.0);
        assert_eq!(state.interest(), 0.0);
    }

    #[test]
    fn test_advance_month() {
        let mut state = ProjectionState::new(1_000.0);
        state.advance_month(0.01, 100.0);

        assert_eq!(state.month, 1);
        assert!((state.balance - 1_110.0).abs() < 1e-9);
        assert!((state.baseline_balance - 1_010.0).abs() < 1e-9);
        assert_eq!(state.contributed, 1_100.0);
        assert!((state.interest() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_contribution_lands_after_growth() {
        // The month's contribution must not earn that month's interest
        let mut state = ProjectionState::new(0.0);
        state.advance_month(0.05, 100.0);

        assert_eq!(state.balance, 100.0);
        assert_eq!(state.interest(), 0.0);
    }

    #[test]
    fn test_contributed_stays_exact() {
        // Fractional deposits must never smear the paid-in total
        let mut state = ProjectionState::new(10_000.0);
        for _ in 0..120 {
            state.advance_month(0.008, 0.1);
        }

        assert_eq!(state.contributed, 10_000.0 + 0.1 * 120.0);
    }
}
