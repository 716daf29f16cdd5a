//! # hc-core
//!
//! Shared error type and core aliases for holcal.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace – the error enum, the `Result` alias, the `ensure!`
//! macro, and the `Year` alias used in every public signature that takes
//! a calendar year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year in the proleptic Gregorian calendar.
pub type Year = u16;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
