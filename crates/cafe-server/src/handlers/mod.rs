//! HTTP handlers

pub mod cafes;
pub mod health;
pub mod pages;

pub use health::health;
