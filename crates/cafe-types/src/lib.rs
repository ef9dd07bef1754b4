//! Cafe Types - Pure type definitions for the cafe catalog
//!
//! This crate contains only plain data types and form-normalization helpers,
//! with no async runtime or database dependencies.

pub mod cafe;
pub mod form;

pub use cafe::*;
pub use form::*;
