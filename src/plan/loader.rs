//! Load plans from CSV files

use super::Plan;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading plan files
#[derive(Debug, Error)]
pub enum PlanLoadError {
    #[error("failed to read plans: {0}")]
    Csv(#[from] csv::Error),
    #[error("plan {plan_id}: {reason}")]
    InvalidPlan { plan_id: u32, reason: String },
}

/// Raw CSV row matching the plan file columns
///
/// The horizon arrives as a float so spreadsheet-produced files with
/// fractional months still load; it is rounded and floored at 0 here,
/// at the boundary.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "InitialBalance")]
    initial_balance: f64,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "AnnualReturnPct")]
    annual_return_pct: f64,
    #[serde(rename = "HorizonMonths")]
    horizon_months: f64,
    #[serde(rename = "AnnualInflationPct", default)]
    annual_inflation_pct: f64,
    #[serde(rename = "TargetBalance", default)]
    target_balance: Option<f64>,
}

impl CsvRow {
    fn to_plan(self) -> Result<Plan, PlanLoadError> {
        let invalid = |reason: String| PlanLoadError::InvalidPlan {
            plan_id: self.plan_id,
            reason,
        };

        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(invalid(format!(
                "InitialBalance must be finite and non-negative, got {}",
                self.initial_balance
            )));
        }

        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(invalid(format!(
                "MonthlyContribution must be finite and non-negative, got {}",
                self.monthly_contribution
            )));
        }

        if !self.annual_return_pct.is_finite() || !self.annual_inflation_pct.is_finite() {
            return Err(invalid("rates must be finite".to_string()));
        }

        if !self.horizon_months.is_finite() {
            return Err(invalid(format!(
                "HorizonMonths must be finite, got {}",
                self.horizon_months
            )));
        }

        if let Some(target) = self.target_balance {
            if !target.is_finite() || target <= 0.0 {
                return Err(invalid(format!(
                    "TargetBalance must be finite and positive, got {}",
                    target
                )));
            }
        }

        Ok(Plan {
            plan_id: self.plan_id,
            initial_balance: self.initial_balance,
            monthly_contribution: self.monthly_contribution,
            annual_return_pct: self.annual_return_pct,
            horizon_months: self.horizon_months.round().max(0.0) as u32,
            annual_inflation_pct: self.annual_inflation_pct,
            target_balance: self.target_balance,
        })
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<Plan>, PlanLoadError> {
    let mut reader = Reader::from_path(path)?;
    let mut plans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_plan()?);
    }

    Ok(plans)
}

/// Load plans from any reader (e.g., string buffer, network stream)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Plan>, PlanLoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_plan()?);
    }

    Ok(plans)
}

/// Load plans from the default sample location
pub fn load_sample_plans() -> Result<Vec<Plan>, PlanLoadError> {
    load_plans("data/sample_plans.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
PlanID,InitialBalance,MonthlyContribution,AnnualReturnPct,HorizonMonths,AnnualInflationPct,TargetBalance
1,10000,1000,10,120,0,
2,5000,250,8.5,239.6,4.5,
3,0,800,12,360,5,1000000
";

    #[test]
    fn test_load_from_reader() {
        let plans = load_plans_from_reader(SAMPLE.as_bytes()).expect("Failed to parse plans");
        assert_eq!(plans.len(), 3);

        let p1 = &plans[0];
        assert_eq!(p1.plan_id, 1);
        assert_eq!(p1.initial_balance, 10_000.0);
        assert_eq!(p1.horizon_months, 120);
        assert!(p1.target_balance.is_none());

        // Fractional horizons round at the boundary
        assert_eq!(plans[1].horizon_months, 240);

        assert_eq!(plans[2].target_balance, Some(1_000_000.0));
    }

    #[test]
    fn test_negative_balance_rejected() {
        let data = "\
PlanID,InitialBalance,MonthlyContribution,AnnualReturnPct,HorizonMonths,AnnualInflationPct,TargetBalance
9,-100,50,10,12,0,
";
        let err = load_plans_from_reader(data.as_bytes()).unwrap_err();
        match err {
            PlanLoadError::InvalidPlan { plan_id, .. } => assert_eq!(plan_id, 9),
            other => panic!("expected InvalidPlan, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_target_rejected() {
        let data = "\
PlanID,InitialBalance,MonthlyContribution,AnnualReturnPct,HorizonMonths,AnnualInflationPct,TargetBalance
4,100,50,10,12,0,0
";
        assert!(load_plans_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_optional_columns() {
        let data = "\
PlanID,InitialBalance,MonthlyContribution,AnnualReturnPct,HorizonMonths
5,100,50,10,12
";
        let plans = load_plans_from_reader(data.as_bytes()).expect("Failed to parse plans");
        assert_eq!(plans[0].annual_inflation_pct, 0.0);
        assert!(plans[0].target_balance.is_none());
    }

    #[test]
    fn test_load_sample_plans() {
        let plans = load_sample_plans().expect("Failed to load sample plans");
        assert!(!plans.is_empty());
        assert!(plans.iter().all(|p| p.initial_balance >= 0.0));
    }
}
