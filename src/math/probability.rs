//! Normal distribution quantiles via the Abramowitz and Stegun rational approximation
//!
//! Accurate to roughly four decimal places, which is ample for propagation
//! modelling. This is not a high-precision quantile implementation.

// Numerator coefficients of the rational correction
const C0: f64 = 2.515_517;
const C1: f64 = 0.802_853;
const C2: f64 = 0.010_328;

// Denominator coefficients of the rational correction
const D1: f64 = 1.432_788;
const D2: f64 = 0.189_269;
const D3: f64 = 0.001_308;

/// Transform a tail probability into the variable of the rational approximation
///
/// Computes `sqrt(-2 ln y)`. Defined for `y` in `(0, 1]`; `y = 0` yields
/// positive infinity and negative `y` yields NaN, both propagated unchanged.
pub fn t_transform(y: f64) -> f64 {
    (-2.0 * y.ln()).sqrt()
}

/// Rational polynomial correction subtracted from [`t_transform`]
// Evaluated in the reference order; fused multiply-add would shift the last bits
#[allow(clippy::suboptimal_flops)]
pub fn rational_correction(z: f64) -> f64 {
    let t = t_transform(z);
    ((C2 * t + C1) * t + C0) / (((D3 * t + D2) * t + D1) * t + 1.0)
}

/// Inverse complementary cumulative normal distribution
///
/// Returns the standard normal deviate exceeded with probability `x`.
/// Only the lower half `(0, 0.5]` is approximated directly; the upper half
/// is obtained by reflection, so `Qi(x) == -Qi(1 - x)` up to the rounding
/// of `1 - x`.
pub fn inverse_complementary_normal(x: f64) -> f64 {
    if x <= 0.5 {
        t_transform(x) - rational_correction(x)
    } else {
        -(t_transform(1.0 - x) - rational_correction(1.0 - x))
    }
}

/// Inverse of the normal distribution with mean `mu` and standard deviation `sigma`
///
/// `p` is a fraction in `(0, 1)`. Nothing is validated here: callers check
/// their own domain, and out-of-range `p` simply yields whatever the
/// approximation produces (NaN or infinity).
// Evaluated in the reference order; fused multiply-add would shift the last bits
#[allow(clippy::suboptimal_flops)]
pub fn norm_inv(p: f64, mu: f64, sigma: f64) -> f64 {
    mu + sigma * inverse_complementary_normal(1.0 - p)
}
