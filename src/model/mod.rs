//! Core data structures for gold alloy measurement and reporting.
//!
//! This module provides the foundational types that flow through `gold-assay`:
//!
//! - [`metal`] – Impurity metal records (name and bulk density).
//! - [`units`] – Mass units, gemstone carats, and the constants of the karat
//!   scale.
//! - [`specimen`] – A measured item: net metal mass, bulk density, and the
//!   assumed second metal, with the density plausibility gate.
//! - [`report`] – Derived outputs: purity results, alloying recipes, and
//!   portfolio valuations.
//!
//! The data model intentionally separates raw measurements ([`Specimen`]) from
//! derived conclusions ([`PurityResult`]), allowing the [`crate::assay`]
//! operations to transform one into the other without any hidden state.
//!
//! [`Specimen`]: specimen::Specimen
//! [`PurityResult`]: report::PurityResult

pub mod metal;
pub mod report;
pub mod specimen;
pub mod units;
