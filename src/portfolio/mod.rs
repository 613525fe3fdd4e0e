//! Purchase lot records and the average-cost book

mod book;
pub mod loader;

pub use book::{Lot, LotBook};
pub use loader::{load_lots, save_lots, LotFileError};
