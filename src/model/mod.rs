//! Building entry loss model
//!
//! This module contains:
//! - Building classes and their empirical coefficients
//! - The loss evaluation itself

/// Building classes and coefficient sets
pub mod coefficients;
/// Entry loss evaluation
pub mod entry_loss;

pub use coefficients::{BuildingClass, CoefficientSet};
pub use entry_loss::EntryLossComponents;
