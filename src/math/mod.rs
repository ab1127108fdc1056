//! Mathematical utilities for the entry loss model

/// Normal distribution quantiles
pub mod probability;
