//! Wealth Planner CLI
//!
//! Command-line interface for running wealth projections and goal solves

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use wealth_planner::goals::{ContributionOutcome, HorizonOutcome};
use wealth_planner::plan::{self, Plan};
use wealth_planner::projection::{ProjectionConfig, ProjectionResult};
use wealth_planner::rates::RateBasis;
use wealth_planner::scenario::ScenarioRunner;

#[derive(Parser, Debug)]
#[command(name = "wealth_planner", version, about = "Monthly wealth projections and goal solves")]
struct Cli {
    /// Plan CSV to load (omit to run the built-in demo plan)
    #[arg(long)]
    plans: Option<PathBuf>,

    /// Plan ID to project when loading from CSV (defaults to the first row)
    #[arg(long)]
    plan_id: Option<u32>,

    /// Target balance for the goal solvers
    #[arg(long)]
    target: Option<f64>,

    /// Use simple annual/12 rate conversion instead of the effective rate
    #[arg(long)]
    nominal: bool,

    /// Write the full monthly series to this CSV path
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Emit results as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let plan = resolve_plan(&cli)?;
    let config = ProjectionConfig {
        rate_basis: if cli.nominal {
            RateBasis::Nominal
        } else {
            RateBasis::Effective
        },
        ..Default::default()
    };
    let runner = ScenarioRunner::with_config(config);
    let result = runner.project(&plan);

    if cli.json {
        return print_json(&runner, &plan, &result, cli.target.or(plan.target_balance));
    }

    println!("Wealth Planner v0.1.0");
    println!("=====================\n");

    println!("Plan: {}", plan.plan_id);
    println!("  Initial Balance: ${:.2}", plan.initial_balance);
    println!("  Monthly Contribution: ${:.2}", plan.monthly_contribution);
    println!("  Annual Return: {:.2}%", plan.annual_return_pct);
    println!("  Annual Inflation: {:.2}%", plan.annual_inflation_pct);
    println!("  Horizon: {} months", plan.horizon_months);
    println!();

    // Print header
    println!("Projection Results ({} rows):", result.rows.len());
    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Month", "Balance", "Real", "Baseline", "Contributed", "Interest"
    );
    println!("{}", "-".repeat(80));

    // Print first 24 months to console
    for row in result.rows.iter().take(25) {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.month, row.balance, row.real_balance, row.baseline_balance, row.contributed,
            row.interest,
        );
    }
    if result.rows.len() > 25 {
        println!("... ({} more months)", result.rows.len() - 25);
    }

    write_series_csv(&cli.output, &result)?;
    println!("\nFull results written to: {}", cli.output.display());

    // Print summary
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Months: {}", summary.months);
    println!("  Final Balance: ${:.2}", summary.final_balance);
    println!("  Final Real Balance: ${:.2}", summary.final_real_balance);
    println!("  Without Contributions: ${:.2}", summary.final_baseline_balance);
    println!("  Contribution Benefit: ${:.2}", summary.contribution_benefit);
    println!("  Total Contributed: ${:.2}", summary.total_contributed);
    println!("  Total Interest: ${:.2}", summary.total_interest);

    // CLI target wins, then whatever target the plan itself carries
    if let Some(target) = cli.target.or(plan.target_balance) {
        print_goal_report(&runner, &plan, target);
    }

    Ok(())
}

/// Load the requested plan, or fall back to the demo plan
fn resolve_plan(cli: &Cli) -> anyhow::Result<Plan> {
    let Some(path) = &cli.plans else {
        return Ok(Plan::with_inflation(1, 10_000.0, 1_000.0, 10.0, 120, 4.0));
    };

    let plans = plan::load_plans(path)
        .with_context(|| format!("failed to load plans from {}", path.display()))?;

    match cli.plan_id {
        Some(id) => plans
            .into_iter()
            .find(|p| p.plan_id == id)
            .with_context(|| format!("plan {} not found in {}", id, path.display())),
        None => plans
            .into_iter()
            .next()
            .with_context(|| format!("no plans in {}", path.display())),
    }
}

/// Write the full monthly series as CSV
fn write_series_csv(path: &PathBuf, result: &ProjectionResult) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(file, "Month,Balance,RealBalance,BaselineBalance,Contributed,Interest")?;
    for row in &result.rows {
        writeln!(
            file,
            "{},{:.8},{:.8},{:.8},{:.8},{:.8}",
            row.month, row.balance, row.real_balance, row.baseline_balance, row.contributed,
            row.interest,
        )?;
    }

    Ok(())
}

/// Print both goal solves for a target balance
fn print_goal_report(runner: &ScenarioRunner, plan: &Plan, target: f64) {
    println!("\nGoal: ${:.2}", target);

    match runner.time_to_target(plan, target) {
        HorizonOutcome::Reached {
            months,
            years,
            remaining_months,
            target_date,
            summary,
            ..
        } => {
            println!(
                "  Time to target: {}y {}m ({} months)",
                years, remaining_months, months
            );
            if let Some(date) = target_date {
                println!("  Target date: {}", date);
            }
            println!("  Balance on arrival: ${:.2}", summary.final_balance);
        }
        HorizonOutcome::Unreachable { reason } => {
            println!("  Time to target: unreachable ({reason})");
        }
    }

    match runner.required_contribution(plan, target) {
        ContributionOutcome::Required {
            monthly_contribution,
            summary,
            ..
        } => {
            println!(
                "  Required deposit over {} months: ${:.2}/month",
                summary.months, monthly_contribution
            );
        }
        ContributionOutcome::NotNeeded { summary, .. } => {
            println!(
                "  No deposits needed: balance alone reaches ${:.2}",
                summary.final_balance
            );
        }
        ContributionOutcome::Unreachable { reason } => {
            println!("  Required deposit: unreachable ({reason})");
        }
    }
}

/// Emit the whole run as one JSON document
fn print_json(
    runner: &ScenarioRunner,
    plan: &Plan,
    result: &ProjectionResult,
    target: Option<f64>,
) -> anyhow::Result<()> {
    let mut doc = serde_json::json!({
        "plan": plan,
        "summary": result.summary(),
        "projection": result,
    });

    if let Some(target) = target {
        doc["target"] = serde_json::json!(target);
        doc["time_to_target"] = serde_json::to_value(runner.time_to_target(plan, target))?;
        doc["required_contribution"] =
            serde_json::to_value(runner.required_contribution(plan, target))?;
    }

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
