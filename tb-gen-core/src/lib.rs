//! Lottery line generation library.
//!
//! This crate draws Thunderball-style lines (five distinct main numbers and
//! one bonus number) and keeps only those matching user criteria:
//! - Exact odd/even and low/mid/high counts
//! - A coarse distribution preference over bands
//! - A bounded retry budget per line, with a warning when it runs out
//!
//! Generated lines can be rendered to text through the `render` module.

/// Line model, criteria and generation logic.
pub mod model;

/// Text rendering of generated lines.
pub mod render;

/// Error types for configuration parsing.
pub mod error;

pub use error::GeneratorError;
pub use model::generator::Generator;
pub use model::generate_options::GenerateOptions;
pub use model::line::GeneratedLine;
