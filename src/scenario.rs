//! Scenario sweeps for side-by-side what-if comparisons
//!
//! Runs the same plan under several assumption sets without rebuilding the
//! base inputs between runs. Everything is an in-memory iteration; each run
//! is independent of the others.

use crate::loan::{amortization_schedule, AmortizationSchedule, LoanParameters};
use crate::sip::{project_sip, SipParameters, SipProjection};

/// Project one SIP plan under each annual-return assumption
pub fn sip_return_sweep(base: &SipParameters, annual_return_pcts: &[f64]) -> Vec<SipProjection> {
    annual_return_pcts
        .iter()
        .map(|&annual_return_pct| {
            project_sip(&SipParameters {
                annual_return_pct,
                ..*base
            })
        })
        .collect()
}

/// Project one SIP plan under each step-up assumption
pub fn sip_step_up_sweep(base: &SipParameters, step_up_pcts: &[f64]) -> Vec<SipProjection> {
    step_up_pcts
        .iter()
        .map(|&step_up_pct| {
            project_sip(&SipParameters {
                step_up_pct,
                ..*base
            })
        })
        .collect()
}

/// Amortize one loan under each annual-rate assumption
pub fn loan_rate_sweep(base: &LoanParameters, annual_rate_pcts: &[f64]) -> Vec<AmortizationSchedule> {
    annual_rate_pcts
        .iter()
        .map(|&annual_rate_pct| {
            amortization_schedule(&LoanParameters {
                annual_rate_pct,
                ..*base
            })
        })
        .collect()
}

/// Run a prepared list of SIP scenarios
pub fn run_sip_scenarios(scenarios: &[SipParameters]) -> Vec<SipProjection> {
    scenarios.iter().map(project_sip).collect()
}
