//! Prelude module for the salon_periods crate.
//!
//! Re-exports the derive macros from derive_more.

pub use derive_more::Display;
