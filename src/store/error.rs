use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse price quote: {0}")]
    PriceParse(#[from] toml::de::Error),

    #[error("failed to encode price quote: {0}")]
    PriceEncode(#[from] toml::ser::Error),

    #[error("ledger record error: {0}")]
    Ledger(#[from] csv::Error),
}
