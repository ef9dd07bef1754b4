//! Storage layer
//!
//! Uses SQLite (embedded, file-backed) - one table, no external services.

pub mod db;

pub use db::Database;
