//! Month-by-month SIP projection engine
//!
//! The step-up makes the contribution piecewise-constant per year, so the
//! projection simulates every contribution month instead of collapsing to a
//! closed-form annuity. The loop bound is `years * 12`.

use serde::{Deserialize, Serialize};

/// Inputs for a SIP evaluation
///
/// Transient: rebuilt from the current field values on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipParameters {
    /// First-year monthly contribution
    pub monthly_amount: f64,

    /// Investment horizon in years
    pub years: u32,

    /// Assumed annual return as a percentage
    pub annual_return_pct: f64,

    /// Annual contribution increase as a percentage, applied at each
    /// 12-month boundary
    pub step_up_pct: f64,
}

impl SipParameters {
    pub fn new(monthly_amount: f64, years: u32, annual_return_pct: f64, step_up_pct: f64) -> Self {
        Self {
            monthly_amount,
            years,
            annual_return_pct,
            step_up_pct,
        }
    }

    /// Build from Option-typed field values
    ///
    /// Any absent field, the step-up included, makes the evaluation absent.
    /// A step-up field holding 0 is present and projects a flat plan.
    pub fn from_fields(
        monthly_amount: Option<f64>,
        years: Option<u32>,
        annual_return_pct: Option<f64>,
        step_up_pct: Option<f64>,
    ) -> Option<Self> {
        Some(Self {
            monthly_amount: monthly_amount?,
            years: years?,
            annual_return_pct: annual_return_pct?,
            step_up_pct: step_up_pct?,
        })
    }

    /// Total contribution months over the horizon
    pub fn total_months(&self) -> u32 {
        self.years * 12
    }

    /// Monthly return rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_pct / 12.0 / 100.0
    }

    /// Step-up as a fraction of the contribution
    pub fn step_up_fraction(&self) -> f64 {
        self.step_up_pct / 100.0
    }
}

/// Derived totals for a SIP plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipOutcome {
    /// Value of all contributions at the end of the horizon
    pub expected_amount: f64,

    /// Sum of contributions paid in
    pub total_invested: f64,

    /// `expected_amount - total_invested`
    pub total_gain: f64,
}

impl SipOutcome {
    /// The defined fallback when any input field is absent
    pub fn zero() -> Self {
        Self {
            expected_amount: 0.0,
            total_invested: 0.0,
            total_gain: 0.0,
        }
    }
}

/// One contribution month of the projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipRow {
    /// Contribution month (1-indexed)
    pub month: u32,

    /// Contribution year (1-indexed); the step-up applies between years
    pub year: u32,

    /// Amount contributed this month
    pub contribution: f64,

    /// Value of this month's contribution at the end of the horizon
    pub future_value: f64,

    /// Contributions paid in through this month
    pub invested_to_date: f64,
}

/// Full projection result: monthly rows plus the summary totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipProjection {
    pub outcome: SipOutcome,
    pub rows: Vec<SipRow>,
}

/// Project a SIP plan month by month
///
/// Contribution `i` (0-indexed) compounds for `n - i` months; after every
/// 12th contribution the monthly amount steps up by the configured fraction.
pub fn project_sip(params: &SipParameters) -> SipProjection {
    let n = params.total_months();
    let r = params.monthly_rate();
    let step_up = params.step_up_fraction();

    let mut contribution = params.monthly_amount;
    let mut expected_amount = 0.0;
    let mut total_invested = 0.0;
    let mut rows = Vec::with_capacity(n as usize);

    for i in 0..n {
        let future_value = contribution * (1.0 + r).powi((n - i) as i32);
        expected_amount += future_value;
        total_invested += contribution;

        rows.push(SipRow {
            month: i + 1,
            year: i / 12 + 1,
            contribution,
            future_value,
            invested_to_date: total_invested,
        });

        if (i + 1) % 12 == 0 {
            contribution *= 1.0 + step_up;
        }
    }

    SipProjection {
        outcome: SipOutcome {
            expected_amount,
            total_invested,
            total_gain: expected_amount - total_invested,
        },
        rows,
    }
}

/// Summary totals for a SIP plan
///
/// Identical to `project_sip(params).outcome`.
pub fn compute_sip(params: &SipParameters) -> SipOutcome {
    project_sip(params).outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_flat_plan_invests_base_amount() {
        // 5000/month for 1 year at 12% annual, no step-up
        let params = SipParameters::new(5000.0, 1, 12.0, 0.0);
        let outcome = compute_sip(&params);

        assert_abs_diff_eq!(outcome.total_invested, 60_000.0, epsilon = 1e-9);
        assert!(outcome.expected_amount > outcome.total_invested);
        assert_abs_diff_eq!(
            outcome.total_gain,
            outcome.expected_amount - outcome.total_invested,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_flat_plan_future_value() {
        // Each contribution i compounds for n-i months:
        // sum of 5000 * 1.01^k for k in 1..=12
        let params = SipParameters::new(5000.0, 1, 12.0, 0.0);
        let outcome = compute_sip(&params);

        let mut expected = 0.0;
        for k in 1..=12 {
            expected += 5000.0 * 1.01_f64.powi(k);
        }
        assert_abs_diff_eq!(outcome.expected_amount, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_step_up_applies_from_month_13() {
        let params = SipParameters::new(1000.0, 2, 10.0, 10.0);
        let projection = project_sip(&params);

        assert_eq!(projection.rows.len(), 24);
        assert_eq!(projection.rows[11].contribution, 1000.0);
        assert_abs_diff_eq!(projection.rows[12].contribution, 1100.0, epsilon = 1e-9);

        // 12 months at base plus 12 months stepped up once
        let invested = projection.outcome.total_invested;
        assert_abs_diff_eq!(invested, 12.0 * 1000.0 + 12.0 * 1100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_step_up_is_present_not_absent() {
        let present = SipParameters::from_fields(Some(5000.0), Some(1), Some(12.0), Some(0.0));
        assert!(present.is_some());
        assert!(compute_sip(&present.unwrap()).total_invested > 0.0);

        let absent = SipParameters::from_fields(Some(5000.0), Some(1), Some(12.0), None);
        assert!(absent.is_none());
    }

    #[test]
    fn test_rows_reconcile_with_outcome() {
        let params = SipParameters::new(2500.0, 5, 11.0, 8.0);
        let projection = project_sip(&params);

        let fv_sum: f64 = projection.rows.iter().map(|row| row.future_value).sum();
        assert_abs_diff_eq!(fv_sum, projection.outcome.expected_amount, epsilon = 1e-6);

        let last = projection.rows.last().unwrap();
        assert_eq!(last.invested_to_date, projection.outcome.total_invested);
        assert_eq!(last.year, 5);
    }

    #[test]
    fn test_compute_matches_projection() {
        let params = SipParameters::new(3000.0, 3, 9.5, 5.0);
        let outcome = compute_sip(&params);
        let projection = project_sip(&params);

        assert_eq!(
            outcome.expected_amount.to_bits(),
            projection.outcome.expected_amount.to_bits()
        );
    }

    #[test]
    fn test_zero_horizon() {
        let params = SipParameters::new(5000.0, 0, 12.0, 0.0);
        let outcome = compute_sip(&params);

        assert_eq!(outcome.expected_amount, 0.0);
        assert_eq!(outcome.total_invested, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let params = SipParameters::new(5000.0, 10, 12.0, 10.0);
        let first = compute_sip(&params);
        let second = compute_sip(&params);

        assert_eq!(
            first.expected_amount.to_bits(),
            second.expected_amount.to_bits()
        );
        assert_eq!(first.total_gain.to_bits(), second.total_gain.to_bits());
    }
}
