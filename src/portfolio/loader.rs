//! CSV round-trip for lot books
//!
//! Files carry one record per lot with `Price,Quantity` columns. Parse
//! failures are real errors here; the zero-default policy belongs to the
//! calculators, not to file I/O.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Lot, LotBook};

/// Errors from reading or writing a lot CSV file
#[derive(Debug, Error)]
pub enum LotFileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad lot record: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw CSV row matching the lot file columns
#[derive(Debug, Serialize, Deserialize)]
struct LotRecord {
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Quantity")]
    quantity: u32,
}

/// Read a lot book from any CSV source
pub fn read_lots<R: Read>(reader: R) -> Result<LotBook, LotFileError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut book = LotBook::new();

    for result in csv_reader.deserialize() {
        let record: LotRecord = result?;
        book.push(Lot::new(record.price, record.quantity));
    }

    Ok(book)
}

/// Load a lot book from a CSV file
pub fn load_lots(path: &Path) -> Result<LotBook, LotFileError> {
    let file = File::open(path)?;
    read_lots(file)
}

/// Write a lot book to a CSV file, one record per lot in book order
pub fn save_lots(path: &Path, book: &LotBook) -> Result<(), LotFileError> {
    let mut writer = csv::Writer::from_path(path)?;

    for lot in book.iter() {
        writer.serialize(LotRecord {
            price: lot.price,
            quantity: lot.quantity,
        })?;
    }

    writer.flush()?;
    Ok(())
}
