//! Equated monthly installment under standard amortization

use serde::{Deserialize, Serialize};

/// Inputs for a loan evaluation
///
/// Transient: rebuilt from the current field values on every evaluation,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a percentage (10 means 10%)
    pub annual_rate_pct: f64,

    /// Repayment term in months
    pub term_months: u32,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_pct: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_months,
        }
    }

    /// Build from Option-typed field values
    ///
    /// Any absent field makes the whole evaluation absent; the caller then
    /// takes the zero-output path.
    pub fn from_fields(
        principal: Option<f64>,
        annual_rate_pct: Option<f64>,
        term_months: Option<u32>,
    ) -> Option<Self> {
        Some(Self {
            principal: principal?,
            annual_rate_pct: annual_rate_pct?,
            term_months: term_months?,
        })
    }

    /// Monthly interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 12.0 / 100.0
    }
}

/// Derived installment figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    /// Fixed payment due each month
    pub emi: f64,

    /// Interest paid over the full term
    pub total_interest: f64,

    /// Principal plus interest over the full term
    pub total_amount: f64,
}

impl EmiBreakdown {
    /// The defined fallback when any input field is absent
    pub fn zero() -> Self {
        Self {
            emi: 0.0,
            total_interest: 0.0,
            total_amount: 0.0,
        }
    }
}

/// Standard amortization: `emi = P·r·(1+r)^n / ((1+r)^n − 1)`
///
/// At a 0% annual rate the denominator is 0 and the outputs are non-finite;
/// the raw arithmetic passes through unguarded.
pub fn compute_emi(params: &LoanParameters) -> EmiBreakdown {
    let principal = params.principal;
    let r = params.monthly_rate();
    let n = params.term_months;

    let growth = (1.0 + r).powi(n as i32);
    let emi = principal * r * growth / (growth - 1.0);
    let total_amount = emi * n as f64;

    EmiBreakdown {
        emi,
        total_interest: total_amount - principal,
        total_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_twelve_month_loan() {
        // 100k over 12 months at 10% annual
        let params = LoanParameters::new(100_000.0, 10.0, 12);
        let result = compute_emi(&params);

        assert_abs_diff_eq!(result.emi, 8791.59, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_amount, 105_499.06, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_interest, 5499.06, epsilon = 0.01);
    }

    #[test]
    fn test_total_amount_identity() {
        let params = LoanParameters::new(250_000.0, 8.5, 240);
        let result = compute_emi(&params);

        assert!((result.total_amount - result.emi * 240.0).abs() < 1e-6);
        assert!((result.total_interest - (result.total_amount - 250_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_missing_field_is_absent() {
        assert!(LoanParameters::from_fields(Some(100_000.0), Some(10.0), None).is_none());
        assert!(LoanParameters::from_fields(None, Some(10.0), Some(12)).is_none());

        let params = LoanParameters::from_fields(Some(100_000.0), Some(10.0), Some(12));
        assert!(params.is_some());
    }

    #[test]
    fn test_zero_fallback() {
        let zero = EmiBreakdown::zero();
        assert_eq!(zero.emi, 0.0);
        assert_eq!(zero.total_interest, 0.0);
        assert_eq!(zero.total_amount, 0.0);
    }

    #[test]
    fn test_zero_rate_boundary_is_non_finite() {
        // 0% drives the denominator (1+0)^n - 1 to zero; the arithmetic is
        // left unguarded
        let params = LoanParameters::new(100_000.0, 0.0, 12);
        let result = compute_emi(&params);

        assert!(result.emi.is_nan());
        assert!(result.total_amount.is_nan());
    }

    #[test]
    fn test_idempotent() {
        let params = LoanParameters::new(54_321.0, 7.25, 60);
        let first = compute_emi(&params);
        let second = compute_emi(&params);

        assert_eq!(first.emi.to_bits(), second.emi.to_bits());
        assert_eq!(first.total_amount.to_bits(), second.total_amount.to_bits());
    }
}
