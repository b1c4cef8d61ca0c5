//! Error types for the coloring engine.
//!
//! - [`ColoringError`] — Top-level errors for graph construction, palette
//!   validation, and solving; [`ColoringError::Infeasible`] is the normal
//!   typed outcome when no coloring exists for the given palette.

pub mod coloring_error;

pub use coloring_error::ColoringError;

/// Convenience alias for solver-level results.
pub type ColoringResult<T> = Result<T, ColoringError>;
