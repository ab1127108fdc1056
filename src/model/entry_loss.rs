//! Building entry loss not exceeded for a given probability
//!
//! The loss is modelled as two log-normally distributed components, one
//! dominated by the horizontal path through the facade and one by the
//! elevation-independent interior paths, power-summed with a fixed clutter
//! floor.

use crate::io::configuration::{
    CLUTTER_FLOOR_DB, ELEVATION_LOSS_PER_DEGREE, ELEVATION_MAX_DEG, ELEVATION_MIN_DEG,
    FREQUENCY_MAX_GHZ, FREQUENCY_MIN_GHZ, PROBABILITY_MAX_PERCENT, PROBABILITY_MIN_PERCENT,
};
use crate::io::error::{Result, domain_error};
use crate::math::probability::norm_inv;
use crate::model::coefficients::BuildingClass;

/// Every intermediate term of one entry loss evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryLossComponents {
    /// Building class the coefficients were taken from
    pub building_class: BuildingClass,
    /// Elevation correction `Le` (dB)
    pub le: f64,
    /// Median loss for horizontal paths `Lh` (dB)
    pub lh: f64,
    /// Median of the first component, `Lh + Le` (dB)
    pub mu1: f64,
    /// Standard deviation of the first component (dB)
    pub sigma1: f64,
    /// Median of the second component (dB)
    pub mu2: f64,
    /// Standard deviation of the second component (dB)
    pub sigma2: f64,
    /// First component at the requested probability (dB)
    pub a: f64,
    /// Second component at the requested probability (dB)
    pub b: f64,
    /// Clutter floor (dB)
    pub c: f64,
    /// Combined building entry loss (dB)
    pub loss_db: f64,
}

/// Check whether a frequency lies within the range the model is documented for
///
/// Purely informational: evaluation never rejects a frequency.
pub fn is_documented_frequency(frequency_ghz: f64) -> bool {
    (FREQUENCY_MIN_GHZ..=FREQUENCY_MAX_GHZ).contains(&frequency_ghz)
}

/// Loss added by the elevation angle at the facade (dB)
pub const fn elevation_loss(elevation_deg: f64) -> f64 {
    ELEVATION_LOSS_PER_DEGREE * elevation_deg.abs()
}

/// Combine losses by summing their linear powers and converting back to dB
///
/// Terms are accumulated left to right in the order given.
pub fn power_sum_db(losses_db: &[f64]) -> f64 {
    10.0 * losses_db
        .iter()
        .map(|loss| 10.0_f64.powf(0.1 * loss))
        .sum::<f64>()
        .log10()
}

/// Evaluate the model and keep every intermediate term
///
/// # Errors
///
/// Returns [`crate::EntryLossError::Domain`] if the elevation lies outside
/// `[-90, 90]` degrees or the probability outside `(0, 100)` percent.
/// Frequency is not checked.
// The explicit comparisons let NaN inputs through, as `contains` would not
#[allow(clippy::manual_range_contains)]
// Evaluated in the reference order; fused multiply-add would shift the last bits
#[allow(clippy::suboptimal_flops)]
pub fn evaluate(
    frequency_ghz: f64,
    probability_percent: f64,
    building_class: BuildingClass,
    elevation_deg: f64,
) -> Result<EntryLossComponents> {
    if elevation_deg < ELEVATION_MIN_DEG || elevation_deg > ELEVATION_MAX_DEG {
        return Err(domain_error(
            "elevation angle",
            elevation_deg,
            "[-90,90]",
        ));
    }

    if probability_percent <= PROBABILITY_MIN_PERCENT
        || probability_percent >= PROBABILITY_MAX_PERCENT
    {
        return Err(domain_error(
            "probability",
            probability_percent,
            "(0,100)",
        ));
    }

    let k = building_class.coefficients();
    let log_f = frequency_ghz.log10();

    let le = elevation_loss(elevation_deg);
    let lh = k.r + k.s * log_f + k.t * log_f.powi(2);

    let sigma2 = k.y + k.z * log_f;
    let sigma1 = k.u + k.v * log_f;

    let mu2 = k.w + k.x * log_f;
    let mu1 = lh + le;
    let c = CLUTTER_FLOOR_DB;

    let p = probability_percent / 100.0;
    let a = norm_inv(p, mu1, sigma1);
    let b = norm_inv(p, mu2, sigma2);

    Ok(EntryLossComponents {
        building_class,
        le,
        lh,
        mu1,
        sigma1,
        mu2,
        sigma2,
        a,
        b,
        c,
        loss_db: power_sum_db(&[a, b, c]),
    })
}

/// Building entry loss not exceeded for `probability_percent` of locations (dB)
///
/// # Errors
///
/// Returns [`crate::EntryLossError::Domain`] if the elevation lies outside
/// `[-90, 90]` degrees or the probability outside `(0, 100)` percent.
pub fn bel(
    frequency_ghz: f64,
    probability_percent: f64,
    building_class: BuildingClass,
    elevation_deg: f64,
) -> Result<f64> {
    evaluate(
        frequency_ghz,
        probability_percent,
        building_class,
        elevation_deg,
    )
    .map(|components| components.loss_db)
}

/// [`bel`] taking the building class as an integer code
///
/// Code `2` selects thermally efficient coefficients, anything else
/// traditional ones.
///
/// # Errors
///
/// Same conditions as [`bel`].
pub fn bel_by_code(
    frequency_ghz: f64,
    probability_percent: f64,
    building_class: i32,
    elevation_deg: f64,
) -> Result<f64> {
    bel(
        frequency_ghz,
        probability_percent,
        BuildingClass::from_code(building_class),
        elevation_deg,
    )
}
