// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod matrix;
pub mod state;

// Re-export public types for convenient access via `qvis::core::TypeName`
pub use error::{ErrorKind, QvisError, Result};
pub use matrix::Matrix;
pub use state::StateVector;
pub(crate) use state::dimension_for;

pub mod constants;
pub use constants::qvis_constants::{FRAC_1_SQRT_2, PI}; // Re-export
