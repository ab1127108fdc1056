//! Statistical building entry loss for radio signals following Recommendation ITU-R P.2109
//!
//! The loss not exceeded for a given percentage of locations is derived from
//! two log-normal components, parameterised by frequency, building class and
//! facade elevation angle, and power-summed with a fixed clutter floor.

#![forbid(unsafe_code)]

/// Error types, model constants and the command-line wrapper
pub mod io;
/// Normal distribution quantile approximation
pub mod math;
/// Building classes, coefficients and the entry loss model
pub mod model;

pub use io::error::{EntryLossError, Result};
pub use model::coefficients::BuildingClass;
pub use model::entry_loss::{bel, bel_by_code};
