//! Month-by-month amortization of a loan

use serde::{Deserialize, Serialize};

use super::emi::{compute_emi, EmiBreakdown, LoanParameters};

/// One month of the repayment schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Repayment month (1-indexed)
    pub month: u32,

    /// Balance owed at the start of the month
    pub opening_balance: f64,

    /// Interest accrued on the opening balance
    pub interest: f64,

    /// Part of the installment that retires principal
    pub principal_component: f64,

    /// Balance owed after the installment
    pub closing_balance: f64,
}

/// Full repayment schedule with its installment summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub breakdown: EmiBreakdown,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Interest accrued across all rows
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|row| row.interest).sum()
    }
}

/// Build the repayment schedule for a loan
///
/// Each installment splits into interest on the opening balance and a
/// principal component; the final closing balance lands at zero up to float
/// rounding. A non-finite installment (the 0% rate boundary) yields the
/// summary with no rows.
pub fn amortization_schedule(params: &LoanParameters) -> AmortizationSchedule {
    let breakdown = compute_emi(params);

    if !breakdown.emi.is_finite() {
        return AmortizationSchedule {
            breakdown,
            rows: Vec::new(),
        };
    }

    let r = params.monthly_rate();
    let mut rows = Vec::with_capacity(params.term_months as usize);
    let mut balance = params.principal;

    for month in 1..=params.term_months {
        let interest = balance * r;
        let principal_component = breakdown.emi - interest;
        let closing_balance = balance - principal_component;

        rows.push(AmortizationRow {
            month,
            opening_balance: balance,
            interest,
            principal_component,
            closing_balance,
        });

        balance = closing_balance;
    }

    AmortizationSchedule { breakdown, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_length_matches_term() {
        let params = LoanParameters::new(100_000.0, 10.0, 12);
        let schedule = amortization_schedule(&params);

        assert_eq!(schedule.rows.len(), 12);
        assert_eq!(schedule.rows[0].month, 1);
        assert_eq!(schedule.rows[11].month, 12);
    }

    #[test]
    fn test_final_balance_retires_loan() {
        let params = LoanParameters::new(100_000.0, 10.0, 12);
        let schedule = amortization_schedule(&params);

        let final_balance = schedule.rows.last().unwrap().closing_balance;
        assert!(final_balance.abs() < 0.01, "residual balance {}", final_balance);
    }

    #[test]
    fn test_interest_sums_to_total() {
        let params = LoanParameters::new(250_000.0, 8.5, 240);
        let schedule = amortization_schedule(&params);

        let diff = (schedule.total_interest() - schedule.breakdown.total_interest).abs();
        assert!(diff < 0.01, "interest mismatch {}", diff);
    }

    #[test]
    fn test_interest_share_declines() {
        let params = LoanParameters::new(100_000.0, 10.0, 60);
        let schedule = amortization_schedule(&params);

        // Early installments are interest-heavy, later ones principal-heavy
        assert!(schedule.rows[0].interest > schedule.rows[59].interest);
        assert!(schedule.rows[0].principal_component < schedule.rows[59].principal_component);
    }

    #[test]
    fn test_zero_rate_yields_no_rows() {
        let params = LoanParameters::new(100_000.0, 0.0, 12);
        let schedule = amortization_schedule(&params);

        assert!(schedule.breakdown.emi.is_nan());
        assert!(schedule.rows.is_empty());
    }
}
