//! Fractional inch components.
//!
//! Dimensions are entered as a whole number of inches plus one of eight
//! fractional steps. Keeping the fraction as a closed enum instead of a raw
//! decimal means fractional-code lookups can never miss on floating-point
//! representation error.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp::approx_eq;

/// One eighth-inch fractional step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fraction {
    /// Whole number, no fractional part.
    #[default]
    Zero,
    /// 1/8" (0.125)
    Eighth,
    /// 1/4" (0.25)
    Quarter,
    /// 3/8" (0.375)
    ThreeEighths,
    /// 1/2" (0.5)
    Half,
    /// 5/8" (0.625)
    FiveEighths,
    /// 3/4" (0.75)
    ThreeQuarters,
    /// 7/8" (0.875)
    SevenEighths,
}

impl Fraction {
    /// All fractional steps in ascending order.
    pub const ALL: [Fraction; 8] = [
        Fraction::Zero,
        Fraction::Eighth,
        Fraction::Quarter,
        Fraction::ThreeEighths,
        Fraction::Half,
        Fraction::FiveEighths,
        Fraction::ThreeQuarters,
        Fraction::SevenEighths,
    ];

    /// Decimal value of this fraction.
    pub fn value(&self) -> f64 {
        match self {
            Fraction::Zero => 0.0,
            Fraction::Eighth => 0.125,
            Fraction::Quarter => 0.25,
            Fraction::ThreeEighths => 0.375,
            Fraction::Half => 0.5,
            Fraction::FiveEighths => 0.625,
            Fraction::ThreeQuarters => 0.75,
            Fraction::SevenEighths => 0.875,
        }
    }

    /// Literal decimal text of this fraction as the legacy sheets write it,
    /// used when rebuilding dimension keys like "12.25x24x2". Empty for a
    /// whole number.
    pub fn decimal_suffix(&self) -> &'static str {
        match self {
            Fraction::Zero => "",
            Fraction::Eighth => ".125",
            Fraction::Quarter => ".25",
            Fraction::ThreeEighths => ".375",
            Fraction::Half => ".5",
            Fraction::FiveEighths => ".625",
            Fraction::ThreeQuarters => ".75",
            Fraction::SevenEighths => ".875",
        }
    }

    /// Match a decimal against the enumerated steps.
    pub fn from_decimal(value: f64) -> Option<Self> {
        Fraction::ALL
            .iter()
            .copied()
            .find(|f| approx_eq(f.value(), value))
    }

    /// Split a decimal dimension into its whole and fractional components.
    /// Returns None when the fractional part is not an eighth-inch step.
    pub fn split_dimension(dimension: f64) -> Option<(u32, Self)> {
        if dimension < 0.0 {
            return None;
        }
        let whole = dimension.trunc() as u32;
        let fraction = Fraction::from_decimal(dimension - dimension.trunc())?;
        Some((whole, fraction))
    }

    /// Check if this is the whole-number step.
    pub fn is_zero(&self) -> bool {
        matches!(self, Fraction::Zero)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
