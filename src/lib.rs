//! Fincalc - Financial calculator engine for three independent widgets
//!
//! This library provides:
//! - Running-average cost basis over purchase lots
//! - Loan installment (EMI) math with full amortization schedules
//! - SIP growth projections with annual contribution step-up
//! - Scenario sweeps across rate and step-up assumptions
//! - A render-ready field-state model for the presentation layer

pub mod input;
pub mod loan;
pub mod portfolio;
pub mod scenario;
pub mod session;
pub mod sip;

// Re-export commonly used types
pub use loan::{compute_emi, EmiBreakdown, LoanParameters};
pub use portfolio::{Lot, LotBook};
pub use session::CalculatorState;
pub use sip::{compute_sip, project_sip, SipOutcome, SipParameters};
