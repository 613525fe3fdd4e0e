//! Input-field state for the three calculator widgets
//!
//! Owns exactly what the page owns: the raw text of every input field plus
//! the lot book. Every accessor recomputes from the current field values;
//! nothing derived is cached, so evaluation order never matters.

use serde::{Deserialize, Serialize};

use crate::input;
use crate::loan::{compute_emi, EmiBreakdown, LoanParameters};
use crate::portfolio::LotBook;
use crate::sip::{compute_sip, SipOutcome, SipParameters};

/// Raw field values of all three widgets plus the accumulated lot book
///
/// Serializable so the presentation boundary can snapshot and restore the
/// whole entry state in one piece.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    // Average-cost widget entry fields
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,

    // Loan widget
    #[serde(default)]
    pub loan_amount: String,
    #[serde(default)]
    pub interest_rate: String,
    #[serde(default)]
    pub loan_term: String,

    // SIP widget
    #[serde(default)]
    pub sip_amount: String,
    #[serde(default)]
    pub sip_period: String,
    #[serde(default)]
    pub sip_returns: String,
    #[serde(default)]
    pub sip_step_up: String,

    /// Accumulated purchase lots
    #[serde(default)]
    pub lots: LotBook,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the entry fields to the lot book and clear them
    ///
    /// When either field is empty or unparseable nothing is appended and the
    /// fields keep their text.
    pub fn add_lot(&mut self) {
        if self.lots.add_raw(&self.price, &self.quantity) {
            self.price.clear();
            self.quantity.clear();
        }
    }

    /// Remove the lot at `index`; out-of-range is a no-op
    pub fn remove_lot(&mut self, index: usize) {
        self.lots.remove(index);
    }

    /// Weighted average price over the current book
    pub fn average_price(&self) -> f64 {
        self.lots.average_price()
    }

    /// Loan inputs parsed from the current field values
    pub fn loan_parameters(&self) -> Option<LoanParameters> {
        LoanParameters::from_fields(
            input::parse_amount(&self.loan_amount),
            input::parse_amount(&self.interest_rate),
            input::parse_count(&self.loan_term),
        )
    }

    /// Installment figures for the current loan fields, zeros when any field
    /// is absent
    pub fn emi(&self) -> EmiBreakdown {
        match self.loan_parameters() {
            Some(params) => compute_emi(&params),
            None => EmiBreakdown::zero(),
        }
    }

    /// SIP inputs parsed from the current field values
    ///
    /// The step-up field participates like the others: "0" is present, an
    /// empty field is absent and zeroes the whole projection.
    pub fn sip_parameters(&self) -> Option<SipParameters> {
        SipParameters::from_fields(
            input::parse_amount(&self.sip_amount),
            input::parse_count(&self.sip_period),
            input::parse_amount(&self.sip_returns),
            input::parse_amount(&self.sip_step_up),
        )
    }

    /// Projection totals for the current SIP fields, zeros when any field is
    /// absent
    pub fn sip(&self) -> SipOutcome {
        match self.sip_parameters() {
            Some(params) => compute_sip(&params),
            None => SipOutcome::zero(),
        }
    }

    /// Everything the page displays, formatted for rendering
    pub fn render(&self) -> RenderedOutputs {
        let emi = self.emi();
        let sip = self.sip();

        RenderedOutputs {
            average_price: format_amount(self.average_price()),
            emi: format_amount(emi.emi),
            total_interest: format_amount(emi.total_interest),
            total_amount: format_amount(emi.total_amount),
            expected_amount: format_amount(sip.expected_amount),
            total_invested: format_amount(sip.total_invested),
            total_gain: format_amount(sip.total_gain),
        }
    }
}

/// Display form of every widget output, rounded to 2 fractional digits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedOutputs {
    pub average_price: String,
    pub emi: String,
    pub total_interest: String,
    pub total_amount: String,
    pub expected_amount: String,
    pub total_invested: String,
    pub total_gain: String,
}

/// Format a monetary value with 2 fractional digits
///
/// Internal computation stays at full precision; rounding happens only here,
/// at the display boundary. Non-finite values format as-is.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
