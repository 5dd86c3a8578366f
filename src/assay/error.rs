//! Error types for alloy composition resolution.
//!
//! This module defines the error type used throughout the assay module.
//! Errors are categorized by source: rejected physical measurements,
//! impossible alloying targets, malformed portfolio holdings, and metal
//! catalog problems.

use thiserror::Error;

/// Errors that can occur while resolving alloy compositions.
///
/// Every variant is a recoverable caller mistake: fix the argument and call
/// again. Out-of-range densities are deliberately *not* here; an implausible
/// measurement is reported as an inconclusive
/// [`PurityResult`](crate::PurityResult), not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A buoyancy scale reading was zero or negative.
    #[error(
        "buoyancy readings must be positive (got {weight_in_air_g} g in air, {weight_in_water_g} g in water)"
    )]
    BuoyancyNotPositive {
        /// Scale reading with the item in air.
        weight_in_air_g: f64,
        /// Scale reading with the item submerged.
        weight_in_water_g: f64,
    },

    /// The submerged reading was at or above the dry reading.
    ///
    /// Archimedes' principle requires the submerged weight to be strictly
    /// lower; equality would imply infinite density and an inversion a
    /// negative one.
    #[error(
        "submerged weight ({weight_in_water_g} g) must be below the dry weight ({weight_in_air_g} g)"
    )]
    BuoyancyInverted {
        /// Scale reading with the item in air.
        weight_in_air_g: f64,
        /// Scale reading with the item submerged.
        weight_in_water_g: f64,
    },

    /// A mass argument that must be positive was not.
    #[error("mass must be positive (got {mass_g} g)")]
    NonPositiveMass {
        /// The offending mass in grams.
        mass_g: f64,
    },

    /// Alloy synthesis target outside the open interval (0, 24).
    ///
    /// 24 karats cannot be reached by *adding* impurity and 0 karats would
    /// contain no gold at all; both make the dilution formula divide by zero
    /// or produce nonsense, so they are rejected up front.
    #[error("target karat must be strictly between 0 and 24 (got {target_karat})")]
    TargetKaratOutOfRange {
        /// The rejected target.
        target_karat: f64,
    },

    /// Karat-raising endpoints violate `0 <= initial < target < 24`.
    #[error(
        "karat raising requires 0 <= initial < target < 24 (got initial {initial_karat}, target {target_karat})"
    )]
    KaratOrderInvalid {
        /// Karat rating of the existing alloy.
        initial_karat: f64,
        /// Desired karat rating.
        target_karat: f64,
    },

    /// A portfolio holding violates its invariants.
    #[error("invalid holding at position {index}: {detail}")]
    InvalidHolding {
        /// Zero-based position in the submitted holdings list.
        index: usize,
        /// Description of the problem.
        detail: String,
    },

    /// A price that must be positive was not.
    ///
    /// A zero price means "no quote configured" elsewhere in the system, so
    /// an operation that needs a real price refuses it here instead of
    /// valuing gold at nothing.
    #[error("price must be positive (got {price_per_gram} per gram)")]
    NonPositivePrice {
        /// The rejected price.
        price_per_gram: f64,
    },

    /// Failed to parse a metal catalog TOML document.
    #[error("failed to parse metal catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// A catalog record violates the metal invariants.
    #[error("invalid catalog record '{name}': {detail}")]
    InvalidCatalogRecord {
        /// The record's name field (possibly empty).
        name: String,
        /// Description of the problem.
        detail: String,
    },

    /// A metal name was not found in the active catalog.
    #[error("unknown metal '{name}' (not in the active catalog)")]
    UnknownMetal {
        /// The name that failed to resolve.
        name: String,
    },
}

impl Error {
    /// Creates an [`InvalidHolding`](Error::InvalidHolding) error.
    ///
    /// # Arguments
    ///
    /// * `index` — Zero-based position of the holding
    /// * `details` — Description of the problem
    pub fn invalid_holding(index: usize, details: impl Into<String>) -> Self {
        Self::InvalidHolding {
            index,
            detail: details.into(),
        }
    }

    /// Creates an [`InvalidCatalogRecord`](Error::InvalidCatalogRecord) error.
    ///
    /// # Arguments
    ///
    /// * `name` — The record's name field
    /// * `details` — Description of the problem
    pub fn invalid_catalog_record(name: &str, details: impl Into<String>) -> Self {
        Self::InvalidCatalogRecord {
            name: name.to_string(),
            detail: details.into(),
        }
    }

    /// Creates an [`UnknownMetal`](Error::UnknownMetal) error.
    pub fn unknown_metal(name: &str) -> Self {
        Self::UnknownMetal {
            name: name.to_string(),
        }
    }
}
