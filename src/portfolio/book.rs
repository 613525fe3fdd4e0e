//! Lot book maintaining the running-average purchase price

use serde::{Deserialize, Serialize};

use crate::input;

/// A single purchase record contributing to the weighted average cost basis
///
/// Immutable once created; lots leave the book only through explicit removal
/// by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// Price paid per share
    pub price: f64,

    /// Number of shares purchased
    pub quantity: u32,
}

impl Lot {
    pub fn new(price: f64, quantity: u32) -> Self {
        Self { price, quantity }
    }

    /// Total amount paid for the lot
    pub fn cost(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Ordered sequence of purchase lots
///
/// Insertion order is significant and duplicate lots are permitted. This is
/// the only mutable state in the system; it changes only through `add_raw`,
/// `push`, and `remove`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotBook {
    lots: Vec<Lot>,
}

impl LotBook {
    pub fn new() -> Self {
        Self { lots: Vec::new() }
    }

    /// Append a lot taken from raw entry-field text
    ///
    /// A silent no-op when either field is empty or unparseable. Returns
    /// whether a lot was actually appended so the field owner can decide to
    /// clear its entry fields.
    pub fn add_raw(&mut self, price: &str, quantity: &str) -> bool {
        match (input::parse_amount(price), input::parse_count(quantity)) {
            (Some(price), Some(quantity)) => {
                self.lots.push(Lot::new(price, quantity));
                true
            }
            _ => false,
        }
    }

    /// Append an already-typed lot
    pub fn push(&mut self, lot: Lot) {
        self.lots.push(lot);
    }

    /// Remove the lot at `index`, shifting later entries down
    ///
    /// An out-of-range index is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.lots.len() {
            self.lots.remove(index);
        }
    }

    /// Total shares held across all lots
    pub fn total_quantity(&self) -> u64 {
        self.lots.iter().map(|lot| lot.quantity as u64).sum()
    }

    /// Total amount paid across all lots
    pub fn total_cost(&self) -> f64 {
        self.lots.iter().map(Lot::cost).sum()
    }

    /// Weighted average price per share
    ///
    /// 0 when the book holds no shares, either because it is empty or because
    /// every lot has zero quantity.
    pub fn average_price(&self) -> f64 {
        let quantity = self.total_quantity();
        if quantity == 0 {
            return 0.0;
        }
        self.total_cost() / quantity as f64
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lot> {
        self.lots.iter()
    }
}
