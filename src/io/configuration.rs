//! Model constants and command-line defaults

// Input domain limits
/// Lowest accepted elevation angle at the facade (degrees)
pub const ELEVATION_MIN_DEG: f64 = -90.0;
/// Highest accepted elevation angle at the facade (degrees)
pub const ELEVATION_MAX_DEG: f64 = 90.0;

/// Exclusive lower bound on the probability (percent)
pub const PROBABILITY_MIN_PERCENT: f64 = 0.0;
/// Exclusive upper bound on the probability (percent)
pub const PROBABILITY_MAX_PERCENT: f64 = 100.0;

// Documented only. Frequencies outside this range still evaluate.
/// Lowest frequency the model is documented for (GHz)
pub const FREQUENCY_MIN_GHZ: f64 = 0.08;
/// Highest frequency the model is documented for (GHz)
pub const FREQUENCY_MAX_GHZ: f64 = 100.0;

/// Additional loss per degree of facade elevation (dB/degree)
pub const ELEVATION_LOSS_PER_DEGREE: f64 = 0.212;

/// Fixed clutter floor combined into every result (dB)
pub const CLUTTER_FLOOR_DB: f64 = -3.0;

// Defaults for the command-line wrapper
/// Probability used when none is given (percent)
pub const DEFAULT_PROBABILITY_PERCENT: f64 = 50.0;
/// Building class code used when none is given
pub const DEFAULT_BUILDING_CLASS: i32 = 1;
/// Elevation used when none is given (degrees)
pub const DEFAULT_ELEVATION_DEG: f64 = 0.0;

/// Decimal places printed for loss values
pub const OUTPUT_PRECISION: usize = 4;
