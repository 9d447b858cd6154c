//! Solve both goal questions for a single plan scenario
//!
//! Runs the time-to-target and required-contribution solvers side by side
//! Supports JSON output for API integration via --json flag
//! Accepts config via environment variables:
//!   INITIAL_BALANCE, MONTHLY_CONTRIBUTION, ANNUAL_RETURN_PCT,
//!   ANNUAL_INFLATION_PCT, HORIZON_MONTHS, TARGET_BALANCE, START_DATE
//! Set RATE_BASIS=nominal for simple annual/12 rate conversion

use std::env;
use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;

use wealth_planner::goals::{self, ContributionOutcome, HorizonOutcome};
use wealth_planner::plan::Plan;
use wealth_planner::projection::ProjectionConfig;
use wealth_planner::rates::RateBasis;

#[derive(Serialize)]
struct GoalReport {
    target_balance: f64,
    plan: Plan,
    time_to_target: HorizonOutcome,
    required_contribution: ContributionOutcome,
    execution_time_ms: u64,
}

fn main() {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    // Read scenario from environment or use defaults
    let initial_balance: f64 = env::var("INITIAL_BALANCE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000.0);

    let monthly_contribution: f64 = env::var("MONTHLY_CONTRIBUTION")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000.0);

    let annual_return_pct: f64 = env::var("ANNUAL_RETURN_PCT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10.0);

    let annual_inflation_pct: f64 = env::var("ANNUAL_INFLATION_PCT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);

    let horizon_months: u32 = env::var("HORIZON_MONTHS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(120);

    let target_balance: f64 = env::var("TARGET_BALANCE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(500_000.0);

    let start_date: Option<NaiveDate> = env::var("START_DATE")
        .ok()
        .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

    let rate_basis = match env::var("RATE_BASIS").as_deref() {
        Ok("nominal") => RateBasis::Nominal,
        _ => RateBasis::Effective,
    };

    let plan = Plan::with_inflation(
        1,
        initial_balance,
        monthly_contribution,
        annual_return_pct,
        horizon_months,
        annual_inflation_pct,
    );

    let config = ProjectionConfig {
        rate_basis,
        ..Default::default()
    };

    if !json_output {
        println!("Plan: ${:.2} + ${:.2}/month at {:.2}% annual over {} months",
                 plan.initial_balance,
                 plan.monthly_contribution,
                 plan.annual_return_pct,
                 plan.horizon_months);
        println!("Target: ${:.2}", target_balance);
        println!("\nSolving...");
    }

    let time_to_target = match start_date {
        Some(today) => goals::time_to_target_from(&plan, target_balance, &config, today),
        None => goals::time_to_target(&plan, target_balance, &config),
    };
    let required_contribution = goals::contribution_to_target(&plan, target_balance, &config);

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let report = GoalReport {
            target_balance,
            plan,
            time_to_target,
            required_contribution,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&report).unwrap());
        return;
    }

    match &time_to_target {
        HorizonOutcome::Reached {
            months,
            years,
            remaining_months,
            target_date,
            summary,
            ..
        } => {
            println!("\n========================================");
            println!("  TIME TO TARGET: {}y {}m ({} months)", years, remaining_months, months);
            if let Some(date) = target_date {
                println!("  Target date:        {}", date);
            }
            println!("  Balance on arrival: ${:.2}", summary.final_balance);
            println!("  Total contributed:  ${:.2}", summary.total_contributed);
            println!("========================================");
        }
        HorizonOutcome::Unreachable { reason } => {
            println!("\n  Time to target: unreachable ({})", reason);
        }
    }

    match &required_contribution {
        ContributionOutcome::Required {
            monthly_contribution,
            summary,
            ..
        } => {
            println!("\n========================================");
            println!("  REQUIRED DEPOSIT: ${:.2}/month", monthly_contribution);
            println!("  Over:             {} months", summary.months);
            println!("  Final balance:    ${:.2}", summary.final_balance);
            println!("========================================");
        }
        ContributionOutcome::NotNeeded { summary, .. } => {
            println!("\n========================================");
            println!("  NO DEPOSITS NEEDED");
            println!("  Balance alone reaches ${:.2}", summary.final_balance);
            println!("========================================");
        }
        ContributionOutcome::Unreachable { reason } => {
            println!("\n  Required deposit: unreachable ({})", reason);
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
