//! Shared types and Arabic text utilities for the sarf morphology engine.
//!
//! This crate holds the leaf components that every other crate consumes:
//!
//! - [`character`] -- Arabic character classification (letters, diacritics,
//!   weak letters, hamza forms)
//! - [`normalize`] -- stateless text normalization (diacritic stripping,
//!   letter-variant unification)
//! - [`root`] -- the validated triliteral [`root::Root`] value type
//! - [`analysis`] -- root classification result types

pub mod analysis;
pub mod character;
pub mod normalize;
pub mod root;

pub use analysis::{RootAnalysis, RootCategory, RootSubtype};
pub use root::{Root, RootError};
