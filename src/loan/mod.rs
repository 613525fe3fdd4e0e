//! Loan installment math and amortization schedules

mod emi;
mod schedule;

pub use emi::{compute_emi, EmiBreakdown, LoanParameters};
pub use schedule::{amortization_schedule, AmortizationRow, AmortizationSchedule};
