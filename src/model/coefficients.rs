//! Empirical coefficients for each building class

/// Construction class of the building being entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildingClass {
    /// Conventional construction without metallised glass or foil insulation
    #[default]
    Traditional,
    /// Modern construction with metallised glass and foil-backed panels
    ThermallyEfficient,
}

impl BuildingClass {
    /// Map an integer class code onto a building class
    ///
    /// Only `2` selects [`BuildingClass::ThermallyEfficient`]. Every other
    /// code, including unassigned ones such as `0` or `99`, falls back to
    /// [`BuildingClass::Traditional`].
    pub const fn from_code(code: i32) -> Self {
        if code == 2 {
            Self::ThermallyEfficient
        } else {
            Self::Traditional
        }
    }

    /// Integer code conventionally used for this class
    pub const fn code(self) -> i32 {
        match self {
            Self::Traditional => 1,
            Self::ThermallyEfficient => 2,
        }
    }

    /// Coefficient set used for this class
    pub const fn coefficients(self) -> &'static CoefficientSet {
        match self {
            Self::Traditional => &TRADITIONAL,
            Self::ThermallyEfficient => &THERMALLY_EFFICIENT,
        }
    }
}

/// The nine empirical constants of the model
///
/// `r`, `s`, `t` shape the horizontal-path median, `u`, `v` its spread,
/// `w`, `x` the second component's median and `y`, `z` its spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    /// Horizontal-path median, constant term (dB)
    pub r: f64,
    /// Horizontal-path median, linear `log10(f)` term
    pub s: f64,
    /// Horizontal-path median, quadratic `log10(f)` term
    pub t: f64,
    /// First component spread, constant term (dB)
    pub u: f64,
    /// First component spread, `log10(f)` term
    pub v: f64,
    /// Second component median, constant term (dB)
    pub w: f64,
    /// Second component median, `log10(f)` term
    pub x: f64,
    /// Second component spread, constant term (dB)
    pub y: f64,
    /// Second component spread, `log10(f)` term
    pub z: f64,
}

/// Coefficients for traditional buildings
pub const TRADITIONAL: CoefficientSet = CoefficientSet {
    r: 12.64,
    s: 3.72,
    t: 0.96,
    u: 9.6,
    v: 2.0,
    w: 9.1,
    x: -3.0,
    y: 4.5,
    z: -2.0,
};

/// Coefficients for thermally efficient buildings
pub const THERMALLY_EFFICIENT: CoefficientSet = CoefficientSet {
    r: 28.19,
    s: -3.00,
    t: 8.48,
    u: 13.5,
    v: 3.8,
    w: 27.8,
    x: -2.9,
    y: 9.4,
    z: -2.1,
};
