//! Venture calculation modules.
//!
//! This module provides the unit-economics derivation and the composite
//! viability score, plus the parsing and rounding helpers they share.

pub mod common;
pub mod scoring;

pub use scoring::{VentureScorer, score};
