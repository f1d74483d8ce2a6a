//! Top-level module for constrained line generation.
//!
//! This module provides:
//! - Draw bounds and band thresholds (`RangeConfig`)
//! - Typed filters (`Criterion`, `Distribution`, `Criteria`)
//! - Per-line statistics (`Stats`, `Band`)
//! - Candidate validation (`validate`, `Rejection`)
//! - Generation configuration (`GenerateOptions`)
//! - The retrying generator itself (`Generator`)

/// High-level interface drawing validated lines.
///
/// Owns the range configuration and the random source, and applies the
/// per-line retry budget.
pub mod generator;

/// Options of a generation run: line count plus criteria.
pub mod generate_options;

/// Typed criteria and their parsing from raw option values.
pub mod criteria;

/// Draw bounds and band thresholds.
pub mod range_config;

/// Parity and band counts over a line.
pub mod stats;

/// An accepted line.
pub mod line;

/// Checks candidate statistics against criteria.
pub mod validation;
