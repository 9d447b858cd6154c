//! AWS Lambda handler for wealth projections and goal solves
//!
//! This Lambda function accepts a plan scenario via JSON and returns the
//! monthly projection series, or one of the goal solver outcomes, for the
//! calculator front-end.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use wealth_planner::goals::{self, ContributionOutcome, HorizonOutcome};
use wealth_planner::plan::Plan;
use wealth_planner::projection::{
    ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary,
};
use wealth_planner::rates::RateBasis;

/// Input scenario for the calculator
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// What to compute (default: project)
    #[serde(default)]
    pub operation: Operation,

    /// Identifier echoed back in the response (default: 1)
    #[serde(default = "default_plan_id")]
    pub plan_id: u32,

    /// Starting balance (default: 0)
    #[serde(default)]
    pub initial_balance: f64,

    /// End-of-month deposit (default: 0)
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Annual return as a percentage (default: 10)
    #[serde(default = "default_annual_return")]
    pub annual_return_pct: f64,

    /// Annual inflation as a percentage (default: 0)
    #[serde(default)]
    pub annual_inflation_pct: f64,

    /// Months to project (default: 120), fractional input rounds to whole months
    #[serde(default = "default_horizon_months")]
    pub horizon_months: f64,

    /// Target balance for the goal solvers
    #[serde(default)]
    pub target_balance: Option<f64>,

    /// Annual-to-monthly rate conversion (default: effective)
    #[serde(default)]
    pub rate_basis: RateBasis,
}

fn default_plan_id() -> u32 { 1 }
fn default_annual_return() -> f64 { 10.0 }
fn default_horizon_months() -> f64 { 120.0 }

/// Which calculation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    Project,
    TimeToTarget,
    RequiredContribution,
}

/// Output for the calculator front-end
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub operation: Operation,
    pub plan: Plan,
    /// Whether deposits or growth can move the balance at all
    pub can_grow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<ProjectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_target: Option<HorizonOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_contribution: Option<ContributionOutcome>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &PlanResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: PlanRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let plan = Plan::with_inflation(
        request.plan_id,
        request.initial_balance,
        request.monthly_contribution,
        request.annual_return_pct,
        request.horizon_months.round().max(0.0) as u32,
        request.annual_inflation_pct,
    );

    let config = ProjectionConfig {
        rate_basis: request.rate_basis,
        ..Default::default()
    };

    let mut response = PlanResponse {
        operation: request.operation,
        can_grow: plan.can_grow(),
        plan: plan.clone(),
        projection: None,
        summary: None,
        time_to_target: None,
        required_contribution: None,
        execution_time_ms: 0,
    };

    match request.operation {
        Operation::Project => {
            let projection = ProjectionEngine::new(config).project_plan(&plan);
            response.summary = Some(projection.summary());
            response.projection = Some(projection);
        }
        Operation::TimeToTarget => {
            let Some(target) = request.target_balance else {
                return Ok(error_response(400, "target_balance is required for time_to_target"));
            };
            response.time_to_target = Some(goals::time_to_target(&plan, target, &config));
        }
        Operation::RequiredContribution => {
            let Some(target) = request.target_balance else {
                return Ok(error_response(
                    400,
                    "target_balance is required for required_contribution",
                ));
            };
            response.required_contribution =
                Some(goals::contribution_to_target(&plan, target, &config));
        }
    }

    response.execution_time_ms = start.elapsed().as_millis() as u64;

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
