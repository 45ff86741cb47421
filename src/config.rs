//! Configuration constants and settings for the calculators.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Units packed per carton for pleated filters.
pub const PLEAT_CARTON_QTY: u32 = 12;

/// Units packed per carton for panels (links divide this by panel count).
pub const PANEL_CARTON_QTY: u32 = 12;

/// Minimum dimension on either axis for panels and links, in inches.
pub const PANEL_MIN_DIM: f64 = 3.25;

/// Global maximum width for exact-cut panels and links, in inches.
pub const PANEL_MAX_WIDTH: f64 = 77.875;

/// Default maximum height for exact-cut panels when the product master
/// carries no override, in inches.
pub const PANEL_DEFAULT_MAX_HEIGHT: f64 = 51.25;

/// The one panel family that is never offered with the antimicrobial
/// add-on.
pub const PANEL_NO_ANTIMICROBIAL_FAMILY: &str = "Tri-Dek FC Panel";

/// Tolerance applied on the second pass of pad dimension validation, in inches.
pub const PAD_SOFT_TOLERANCE: f64 = 0.25;

/// Total length below which pads use the per-prefix carton table, in inches.
pub const PAD_SHORT_LENGTH_CUTOFF: f64 = 26.0;

/// Product prefix that selects wire ring frame behaviour in the sleeves
/// calculator. Kept as a string to preserve the leading zero.
pub const FRAME_PREFIX: &str = "072";

/// Wire frame width bands, in inches. Band 1 starts at 4"; the odd upper
/// bounds come straight from the wire-frame price sheet.
pub const FRAME_BAND_MIN_WIDTH: f64 = 4.0;
pub const FRAME_BAND_1_MAX: f64 = 8.88;
pub const FRAME_BAND_2_MAX: f64 = 16.875;
pub const FRAME_BAND_3_MAX: f64 = 33.25;

/// Cartons always hold exactly one wire ring frame.
pub const FRAME_CARTON_QTY: u32 = 1;

/// Pleat family prefixes whose overrides live in exception table A.
/// Membership in this set is the only thing that selects the table.
pub const PLEAT_TABLE_A_PREFIXES: &[&str] = &["11204", "11302", "11305", "11308"];

/// Pleat family prefix priced from the Update columns using the
/// depth-2-derived size code.
pub const PLEAT_UPDATE_PREFIX: &str = "11204";

/// Pleat family prefix priced from the Double columns using the
/// actual-depth size code.
pub const PLEAT_DOUBLE_PREFIX: &str = "21556";

/// Pleat family prefixes priced from the Double columns on the
/// depth-2-derived size code, escalating to Triple for codes 2 and up.
pub const PLEAT_ESCALATING_PREFIXES: &[&str] = &["11302", "11305", "11308"];

/// Face-value window for the generic depth-2 forced-Triple exception.
/// The upper bound is 899, not 900; the sheet's range ends there.
pub const PLEAT_TRIPLE_FACE_MIN: f64 = 600.0;
pub const PLEAT_TRIPLE_FACE_MAX: f64 = 899.0;

/// Pad product prefixes that may be ordered with the antimicrobial add-on.
pub const PAD_ANTIMICROBIAL_PREFIXES: &[&str] = &["033", "055", "077"];

/// Part number emitted when dimensions require a manual quote.
pub const MANUAL_QUOTE_PART: &str = "Contact Customer Service";

/// Placeholder part number for calculations that never produced one.
pub const NO_PART: &str = "N/A";

/// Option label for the standard (no add-on) selection.
pub const STANDARD_OPTION: &str = "None (Standard)";

/// Option label for the antimicrobial add-on.
pub const ANTIMICROBIAL_OPTION: &str = "Antimicrobial";

/// Price-cell sentinel meaning the antimicrobial variant is not offered.
pub const PRICE_UNAVAILABLE: &str = "N/A";

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}

/// Utility functions for money values.
pub mod money {
    /// Round a price to two decimal places.
    #[inline]
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Parse a price cell that may carry currency formatting ("$1,234.50").
    /// Returns None for empty cells and anything that is not a number once
    /// the formatting characters are stripped.
    pub fn parse_price(cell: &str) -> Option<f64> {
        let cleaned: String = cell
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(money::round2(12.345), 12.35);
        assert_eq!(money::round2(12.344), 12.34);
        assert_eq!(money::round2(0.0), 0.0);
    }

    #[test]
    fn test_parse_price_plain() {
        assert_eq!(money::parse_price("41.50"), Some(41.5));
    }

    #[test]
    fn test_parse_price_currency() {
        assert_eq!(money::parse_price("$1,234.56"), Some(1234.56));
    }

    #[test]
    fn test_parse_price_non_numeric() {
        assert_eq!(money::parse_price("N/A"), None);
        assert_eq!(money::parse_price("Call for Quote"), None);
        assert_eq!(money::parse_price(""), None);
    }

    #[test]
    fn test_approx_eq() {
        assert!(float_cmp::approx_eq(0.25, 0.25));
        assert!(!float_cmp::approx_eq(0.25, 0.375));
    }
}
