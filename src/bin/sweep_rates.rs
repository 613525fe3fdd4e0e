//! Compare SIP and loan outcomes across rate assumptions
//!
//! Usage: cargo run --bin sweep_rates
//! Accepts config via environment variables:
//!   SIP_AMOUNT, SIP_YEARS, SIP_STEP_UP, LOAN_PRINCIPAL, LOAN_MONTHS

use std::env;

use fincalc::loan::LoanParameters;
use fincalc::scenario::{loan_rate_sweep, sip_return_sweep};
use fincalc::sip::SipParameters;

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn main() {
    env_logger::init();

    let sip_base = SipParameters::new(
        env_f64("SIP_AMOUNT", 5000.0),
        env_u32("SIP_YEARS", 10),
        0.0, // replaced per scenario by the sweep
        env_f64("SIP_STEP_UP", 0.0),
    );
    let return_pcts = [8.0, 10.0, 12.0, 15.0];

    println!("{}", "=".repeat(60));
    println!(
        "SIP: {:.2}/month for {} years, {:.1}% annual step-up",
        sip_base.monthly_amount, sip_base.years, sip_base.step_up_pct
    );
    println!("{}", "=".repeat(60));
    println!(
        "{:>8} {:>16} {:>16} {:>16}",
        "Return%", "Invested", "Expected", "Gain"
    );
    for (pct, projection) in return_pcts.iter().zip(sip_return_sweep(&sip_base, &return_pcts)) {
        let outcome = projection.outcome;
        println!(
            "{:>8.1} {:>16.2} {:>16.2} {:>16.2}",
            pct, outcome.total_invested, outcome.expected_amount, outcome.total_gain
        );
    }

    let loan_base = LoanParameters::new(
        env_f64("LOAN_PRINCIPAL", 100_000.0),
        0.0, // replaced per scenario by the sweep
        env_u32("LOAN_MONTHS", 120),
    );
    let rate_pcts = [7.0, 8.5, 10.0, 12.0];

    println!();
    println!("{}", "=".repeat(60));
    println!(
        "Loan: {:.2} over {} months",
        loan_base.principal, loan_base.term_months
    );
    println!("{}", "=".repeat(60));
    println!("{:>8} {:>14} {:>16} {:>16}", "Rate%", "EMI", "Interest", "Total");
    for (pct, schedule) in rate_pcts.iter().zip(loan_rate_sweep(&loan_base, &rate_pcts)) {
        let breakdown = schedule.breakdown;
        println!(
            "{:>8.1} {:>14.2} {:>16.2} {:>16.2}",
            pct, breakdown.emi, breakdown.total_interest, breakdown.total_amount
        );
    }
}
