//! Run projections for every plan in a plan file
//!
//! Outputs monthly aggregated balances across the whole plan block

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use wealth_planner::plan::load_plans;
use wealth_planner::projection::ProjectionConfig;
use wealth_planner::rates::RateBasis;
use wealth_planner::scenario::ScenarioRunner;

/// Aggregated monthly results across all plans
#[derive(Debug, Clone, Default)]
struct AggregatedRow {
    month: u32,
    total_balance: f64,
    total_real_balance: f64,
    total_baseline: f64,
    total_contributed: f64,
    total_interest: f64,
    plans_active: u32,
}

fn main() {
    env_logger::init();

    // Configuration via environment variables
    let plans_file =
        env::var("PLANS_FILE").unwrap_or_else(|_| "data/sample_plans.csv".to_string());
    let output_path =
        env::var("OUTPUT_FILE").unwrap_or_else(|_| "batch_projection_output.csv".to_string());
    let rate_basis = match env::var("RATE_BASIS").as_deref() {
        Ok("nominal") => RateBasis::Nominal,
        _ => RateBasis::Effective,
    };
    let json_output = env::args().any(|a| a == "--json");

    let start = Instant::now();
    if !json_output {
        println!("Loading plans from {}...", plans_file);
    }

    let plans = load_plans(&plans_file).expect("Failed to load plans");
    if !json_output {
        println!("Loaded {} plans in {:?}", plans.len(), start.elapsed());
    }

    let config = ProjectionConfig {
        rate_basis,
        ..Default::default()
    };
    let runner = ScenarioRunner::with_config(config);

    if !json_output {
        println!("Running projections...");
    }
    let proj_start = Instant::now();
    let results = runner.project_batch(&plans);
    let proj_elapsed = proj_start.elapsed();
    if !json_output {
        println!("Projections complete in {:?}", proj_elapsed);
    }

    // Aggregate results by month, plans drop out as their horizons end
    let longest = results.iter().map(|r| r.rows.len()).max().unwrap_or(0);
    let mut aggregated: Vec<AggregatedRow> = (0..longest as u32)
        .map(|m| AggregatedRow {
            month: m,
            ..Default::default()
        })
        .collect();

    for result in &results {
        for row in &result.rows {
            let agg = &mut aggregated[row.month as usize];
            agg.total_balance += row.balance;
            agg.total_real_balance += row.real_balance;
            agg.total_baseline += row.baseline_balance;
            agg.total_contributed += row.contributed;
            agg.total_interest += row.interest;
            agg.plans_active += 1;
        }
    }

    if json_output {
        let last = aggregated.last();
        let doc = serde_json::json!({
            "plans": plans.len(),
            "months": longest.saturating_sub(1),
            "final_total_balance": last.map_or(0.0, |r| r.total_balance),
            "final_total_contributed": last.map_or(0.0, |r| r.total_contributed),
            "execution_time_ms": proj_elapsed.as_millis() as u64,
        });
        println!("{}", serde_json::to_string_pretty(&doc).unwrap());
        return;
    }

    // Write output
    let mut file = File::create(&output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Month,Balance,RealBalance,Baseline,Contributed,Interest,PlansActive"
    )
    .unwrap();
    for row in &aggregated {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            row.month,
            row.total_balance,
            row.total_real_balance,
            row.total_baseline,
            row.total_contributed,
            row.total_interest,
            row.plans_active,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    println!("\nBlock Summary:");
    for &m in &[1usize, 12, 60, 120, 240] {
        if let Some(row) = aggregated.get(m) {
            println!(
                "  Month {:>3}: Plans={:>3}, Balance=${:.0}, Contributed=${:.0}",
                m, row.plans_active, row.total_balance, row.total_contributed
            );
        }
    }
    if let Some(row) = aggregated.last() {
        println!(
            "  Month {:>3}: Plans={:>3}, Balance=${:.0} (longest horizon)",
            row.month, row.plans_active, row.total_balance
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
