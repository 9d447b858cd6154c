//! Scenario runner for batch projections and goal solves
//!
//! Holds a projection config once, then runs many plans or many what-if
//! configs against it without rebuilding engines by hand.

use rayon::prelude::*;

use crate::goals::{self, ContributionOutcome, HorizonOutcome};
use crate::plan::Plan;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-configured runner for projections and goal solves
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.project_batch(&plans);
/// let outcome = runner.time_to_target(&plans[0], 500_000.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a specific config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single projection over the plan horizon
    pub fn project(&self, plan: &Plan) -> ProjectionResult {
        ProjectionEngine::new(self.config.clone()).project_plan(plan)
    }

    /// Run projections for a batch of plans in parallel
    ///
    /// Results come back in plan order. Engine construction is cheap, so
    /// each worker builds its own.
    pub fn project_batch(&self, plans: &[Plan]) -> Vec<ProjectionResult> {
        plans
            .par_iter()
            .map(|plan| ProjectionEngine::new(self.config.clone()).project_plan(plan))
            .collect()
    }

    /// Run one plan under several what-if configs
    pub fn project_scenarios(
        &self,
        plan: &Plan,
        configs: &[ProjectionConfig],
    ) -> Vec<ProjectionResult> {
        configs
            .iter()
            .map(|config| ProjectionEngine::new(config.clone()).project_plan(plan))
            .collect()
    }

    /// Solve how long the plan takes to reach a target balance
    pub fn time_to_target(&self, plan: &Plan, target: f64) -> HorizonOutcome {
        goals::time_to_target(plan, target, &self.config)
    }

    /// Solve the monthly deposit the plan needs to reach a target balance
    pub fn required_contribution(&self, plan: &Plan, target: f64) -> ContributionOutcome {
        goals::contribution_to_target(plan, target, &self.config)
    }

    /// Get reference to the runner config
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plans() -> Vec<Plan> {
        vec![
            Plan::new(1, 10_000.0, 1_000.0, 10.0, 120),
            Plan::new(2, 0.0, 500.0, 8.0, 240),
            Plan::new(3, 50_000.0, 0.0, 6.0, 60),
        ]
    }

    #[test]
    fn test_batch_preserves_plan_order() {
        let runner = ScenarioRunner::new();
        let results = runner.project_batch(&test_plans());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].plan_id, 1);
        assert_eq!(results[1].plan_id, 2);
        assert_eq!(results[2].plan_id, 3);
        assert_eq!(results[1].rows.len(), 241);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let plans = test_plans();
        let batch = runner.project_batch(&plans);

        for (plan, result) in plans.iter().zip(batch.iter()) {
            assert_eq!(result.final_balance(), runner.project(plan).final_balance());
        }
    }

    #[test]
    fn test_scenario_sweep_over_horizons() {
        let runner = ScenarioRunner::new();
        let plan = Plan::new(1, 10_000.0, 500.0, 10.0, 120);

        let configs: Vec<_> = [24, 120, 360]
            .iter()
            .map(|&months| ProjectionConfig {
                horizon_override: Some(months),
                ..Default::default()
            })
            .collect();

        let results = runner.project_scenarios(&plan, &configs);
        assert_eq!(results.len(), 3);

        // Longer horizons accumulate more
        assert!(results[2].final_balance() > results[0].final_balance());
    }

    #[test]
    fn test_goal_solves_delegate() {
        let runner = ScenarioRunner::new();
        let plan = Plan::new(1, 10_000.0, 1_000.0, 10.0, 120);

        match runner.time_to_target(&plan, 500_000.0) {
            HorizonOutcome::Reached { months, .. } => assert_eq!(months, 193),
            HorizonOutcome::Unreachable { reason } => panic!("unexpected {reason}"),
        }

        match runner.required_contribution(&plan, 500_000.0) {
            ContributionOutcome::Required {
                monthly_contribution,
                ..
            } => assert!(monthly_contribution > 0.0),
            other => panic!("unexpected {other:?}"),
        }
    }
}
