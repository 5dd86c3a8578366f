//! A pure Rust library for resolving the composition of gold alloys from
//! physical measurements. It turns buoyancy weighings and known impurity
//! densities into validated purity results, computes alloying and
//! karat-raising recipes, and projects market values, all without touching
//! the filesystem or any global state.
//!
//! # Features
//!
//! - **Density derivation** — Archimedes' buoyancy method from a dry and a
//!   submerged scale reading
//! - **Purity resolution** — Binary gold/impurity composition via the
//!   additive-volume mixing rule, with a plausibility gate that reports
//!   implausible measurements as inconclusive instead of guessing
//! - **Alloy recipes** — Dilution of fine gold to a target karat and raising
//!   an existing alloy with added gold
//! - **Valuation** — Market value projection and portfolio appraisal that
//!   never confuse "no price configured" with "worth nothing"
//! - **Persistence codecs** — Price quote (TOML) and calculation ledger (CSV)
//!   codecs generic over `Read`/`Write`; callers own all file handles
//!
//! # Quick Start
//!
//! The resolver operates on a [`Specimen`]: a mass, a density, and the
//! assumed second metal from a [`MetalCatalog`]:
//!
//! ```
//! use gold_assay::{
//!     AssayError, MetalCatalog, project_value, resolve_purity, specimen_from_buoyancy,
//!     synthesize_alloy,
//! };
//!
//! // A 19 g ring that weighs 18 g submerged, assumed to be gold cut with copper.
//! let catalog = MetalCatalog::builtin();
//! let copper = catalog.resolve("copper")?.clone();
//! let specimen = specimen_from_buoyancy(19.0, 18.0, copper.clone())?;
//! assert!((specimen.density_g_cm3 - 19.0).abs() < 1e-9);
//!
//! let result = resolve_purity(&specimen);
//! let purity = result.conclusive().expect("density is in range");
//! assert!((purity.karats - 23.65).abs() < 0.01);
//! assert!((purity.pure_gold_mass_g - 18.72).abs() < 0.01);
//!
//! // Dilute 100 g of fine gold down to 18 karats with the same copper.
//! let recipe = synthesize_alloy(100.0, 18.0, &copper)?;
//! assert!((recipe.addition_g - 33.33).abs() < 0.01);
//!
//! // Only a configured (positive) price yields a value.
//! assert_eq!(project_value(purity.pure_gold_mass_g, 0.0), None);
//! let value = project_value(purity.pure_gold_mass_g, 95.0).expect("price is set");
//! assert!((value - 1778.71).abs() < 0.01);
//! # Ok::<(), AssayError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`store`] — Persistence codecs for the price quote and the calculation
//!   ledger
//! - [`resolve_purity`] — Main composition resolution function
//! - [`MetalCatalog`] — Builtin and user-supplied impurity metal records
//!
//! # Data Types
//!
//! ## Measurements
//!
//! - [`Specimen`] — One measured item: net mass, density, assumed impurity
//! - [`Metal`] — An impurity metal with its bulk density
//! - [`MassUnit`] — Gram, troy ounce, avoirdupois ounce, pennyweight, tola
//!
//! ## Results
//!
//! - [`PurityResult`] — Conclusive purity or an inconclusive reason
//! - [`Purity`] — Purity percent, karats, and pure gold mass
//! - [`Inconclusive`] — Why a resolution could not conclude
//! - [`AlloyRecipe`] — What to add and what comes out
//! - [`Holding`] / [`PortfolioValuation`] — Portfolio lines and their value
//!
//! ## Persistence
//!
//! - [`store::PriceQuote`] — Stored spot price with update time
//! - [`store::LedgerRecord`] — One row of the calculation ledger

mod assay;
mod model;

pub mod store;

pub use model::metal::Metal;
pub use model::specimen::Specimen;
pub use model::units::{
    stone_carats_to_grams, MassUnit, ParseMassUnitError, DENSITY_TOLERANCE_G_CM3,
    GOLD_DENSITY_G_CM3, GRAMS_PER_CARAT, KARATS_PER_PURITY_PERCENT, MAX_KARATS,
};

pub use model::report::{
    Additive, AlloyRecipe, Holding, Inconclusive, PortfolioValuation, Purity, PurityResult,
};

pub use assay::{
    alloy_density_g_cm3, appraise_portfolio, derive_density, project_value, raise_karat,
    resolve_purity, specimen_from_buoyancy, synthesize_alloy, MetalCatalog,
};

pub use assay::Error as AssayError;
