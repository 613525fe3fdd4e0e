//! SIP growth projection with annual contribution step-up

mod engine;

pub use engine::{compute_sip, project_sip, SipOutcome, SipParameters, SipProjection, SipRow};
