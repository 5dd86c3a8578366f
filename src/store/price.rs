use super::error::Error;
use crate::model::units::MassUnit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// The stored spot-price quote. A non-positive price means "not configured";
/// value projections treat that as "no price available", never as zero worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price_per_gram: f64,
    pub updated: DateTime<Utc>,
}

impl PriceQuote {
    pub fn per_gram(price_per_gram: f64, updated: DateTime<Utc>) -> Self {
        Self {
            price_per_gram,
            updated,
        }
    }

    /// Builds a quote from a per-troy-ounce figure, the form spot prices are
    /// usually published in.
    pub fn per_troy_ounce(price_per_troy_ounce: f64, updated: DateTime<Utc>) -> Self {
        Self {
            price_per_gram: price_per_troy_ounce / MassUnit::TroyOunce.grams_per_unit(),
            updated,
        }
    }

    #[inline]
    pub fn is_configured(&self) -> bool {
        self.price_per_gram > 0.0
    }

    #[inline]
    pub fn price_per_troy_ounce(&self) -> f64 {
        self.price_per_gram * MassUnit::TroyOunce.grams_per_unit()
    }
}

pub fn read_price<R: Read>(mut reader: R) -> Result<PriceQuote, Error> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let quote: PriceQuote = toml::from_str(&contents)?;
    Ok(quote)
}

pub fn write_price<W: Write>(mut writer: W, quote: &PriceQuote) -> Result<(), Error> {
    let contents = toml::to_string_pretty(quote)?;
    writer.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap()
    }

    #[test]
    fn round_trip_through_toml() {
        let quote = PriceQuote::per_gram(95.25, sample_time());
        let mut buffer = Vec::new();
        write_price(&mut buffer, &quote).unwrap();
        let read_back = read_price(buffer.as_slice()).unwrap();
        assert_eq!(read_back, quote);
    }

    #[test]
    fn per_troy_ounce_conversion() {
        let quote = PriceQuote::per_troy_ounce(2_963.0, sample_time());
        assert!(approx_eq(quote.price_per_gram, 95.2627, 1e-4));
        assert!(approx_eq(quote.price_per_troy_ounce(), 2_963.0, 1e-9));
    }

    #[test]
    fn parses_hand_written_quote() {
        let contents = "price_per_gram = 88.5\nupdated = \"2024-11-05T09:30:00Z\"\n";
        let quote = read_price(contents.as_bytes()).unwrap();
        assert_eq!(quote.price_per_gram, 88.5);
        assert_eq!(quote.updated, sample_time());
        assert!(quote.is_configured());
    }

    #[test]
    fn zero_price_is_not_configured() {
        let quote = PriceQuote::per_gram(0.0, sample_time());
        assert!(!quote.is_configured());
    }

    #[test]
    fn rejects_malformed_quote() {
        let result = read_price("price_per_gram = \"lots\"".as_bytes());
        assert!(matches!(result, Err(Error::PriceParse(_))));
    }
}
