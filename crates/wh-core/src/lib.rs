//! # wh-core
//!
//! Core types, error definitions, and settings for workinghours.
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace: the [`Hours`] alias, the error enum with its `ensure!` /
//! `fail!` macros, and the process-wide [`Settings`] that supply the
//! reference date holidays are anchored to.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (reference date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A duration or time of day in fractional hours (e.g. 13.5 = 13:30).
pub type Hours = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedReferenceDate, Settings};
