//! Rate conversion between annual percentages and monthly decimal rates
//!
//! Calculator inputs quote annual rates as percentages (10 means 10%/year).
//! Compounding happens monthly with end-of-month contributions, so annual
//! rates must be converted to their monthly-compounding equivalent before
//! projection. Two conversions are supported:
//! - Effective (geometric): preserves the true effective annual yield
//! - Nominal: legacy simple division by 12

use serde::{Deserialize, Serialize};

/// Method for converting annual percentage rates to monthly decimal rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    /// Geometric: monthly = (1 + annual/100)^(1/12) - 1
    #[default]
    Effective,
    /// Simple division: monthly = annual/100/12
    Nominal,
}

/// Convert an annual percentage to the equivalent effective monthly rate
///
/// Negative annual rates are clamped to 0 (the effective rate never goes
/// negative), so the output is always finite and non-negative for finite
/// input. Used for both return and inflation rates.
pub fn effective_monthly_rate(annual_pct: f64) -> f64 {
    let annual = annual_pct.max(0.0) / 100.0;
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

/// Convert an annual percentage to a monthly rate by simple division
///
/// Same clamping as [`effective_monthly_rate`]. Compounding this rate
/// overshoots the stated annual yield; kept only as an explicit legacy basis.
pub fn nominal_monthly_rate(annual_pct: f64) -> f64 {
    annual_pct.max(0.0) / 100.0 / 12.0
}

/// Convert an annual percentage using the selected basis
pub fn monthly_rate(annual_pct: f64, basis: RateBasis) -> f64 {
    match basis {
        RateBasis::Effective => effective_monthly_rate(annual_pct),
        RateBasis::Nominal => nominal_monthly_rate(annual_pct),
    }
}

/// Cumulative inflation factor after `month` months at a monthly rate
pub fn inflation_factor(monthly_inflation: f64, month: u32) -> f64 {
    (1.0 + monthly_inflation).powf(f64::from(month))
}

/// Deflate a nominal amount to its base-date equivalent
pub fn deflate(nominal: f64, monthly_inflation: f64, month: u32) -> f64 {
    nominal / inflation_factor(monthly_inflation, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_effective_rate_ten_percent() {
        let r = effective_monthly_rate(10.0);

        // (1.1)^(1/12) - 1 = 0.0079741...
        assert!((r - 0.007974).abs() < 1e-6, "monthly rate mismatch: {}", r);

        // Twelve months of compounding must recover the annual yield
        assert_relative_eq!((1.0 + r).powi(12), 1.10, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_rates_clamp_to_zero() {
        assert_eq!(effective_monthly_rate(-5.0), 0.0);
        assert_eq!(nominal_monthly_rate(-5.0), 0.0);
        assert_eq!(effective_monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_nominal_rate_is_simple_division() {
        assert_relative_eq!(nominal_monthly_rate(12.0), 0.01, max_relative = 1e-12);
    }

    #[test]
    fn test_basis_dispatch() {
        assert_eq!(monthly_rate(8.0, RateBasis::Effective), effective_monthly_rate(8.0));
        assert_eq!(monthly_rate(8.0, RateBasis::Nominal), nominal_monthly_rate(8.0));

        // Simple division runs hotter than the geometric conversion
        assert!(monthly_rate(8.0, RateBasis::Nominal) > monthly_rate(8.0, RateBasis::Effective));
    }

    #[test]
    fn test_inflation_factor_compounds() {
        assert_eq!(inflation_factor(0.0, 37), 1.0);

        let i = effective_monthly_rate(6.0);
        assert_relative_eq!(inflation_factor(i, 12), 1.06, max_relative = 1e-12);
    }

    #[test]
    fn test_deflate() {
        let i = effective_monthly_rate(6.0);

        // Month 0 is the base date
        assert_eq!(deflate(1234.5, i, 0), 1234.5);
        assert_relative_eq!(deflate(1060.0, i, 12), 1000.0, max_relative = 1e-9);
    }
}
