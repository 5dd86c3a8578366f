use std::fmt;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod ledger;
pub mod price;

pub use error::Error;
pub use ledger::{append_record, read_records, LedgerRecord};
pub use price::{read_price, write_price, PriceQuote};

/// Which calculation produced a ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Purity from a buoyancy weighing.
    Assay,
    /// Purity from a directly entered density.
    Purity,
    /// Dilution of pure gold down to a target karat.
    Alloy,
    /// Raising an alloy to a higher karat with pure gold.
    Raise,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Assay => write!(f, "assay"),
            Operation::Purity => write!(f, "purity"),
            Operation::Alloy => write!(f, "alloy"),
            Operation::Raise => write!(f, "raise"),
        }
    }
}
