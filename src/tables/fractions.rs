//! Fractional-code tables.
//!
//! Each product family carries its own mapping from fractional steps to the
//! short codes embedded in part numbers. A fraction with no row maps to the
//! empty string and reads as a whole number.

use serde::{Deserialize, Serialize};

use crate::model::Fraction;

/// One fraction-to-code row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionCode {
    pub fraction: Fraction,
    pub code: String,
}

/// A product family's fractional-code table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FractionTable {
    rows: Vec<FractionCode>,
}

impl FractionTable {
    pub fn new(rows: Vec<FractionCode>) -> Self {
        Self { rows }
    }

    /// Code for a fraction; empty string when the table has no row for it.
    pub fn code_for(&self, fraction: Fraction) -> &str {
        self.rows
            .iter()
            .find(|row| row.fraction == fraction)
            .map(|row| row.code.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letter_table() -> FractionTable {
        FractionTable::new(
            [
                (Fraction::Eighth, "A"),
                (Fraction::Quarter, "B"),
                (Fraction::ThreeEighths, "C"),
                (Fraction::Half, "D"),
                (Fraction::FiveEighths, "E"),
                (Fraction::ThreeQuarters, "F"),
                (Fraction::SevenEighths, "G"),
            ]
            .into_iter()
            .map(|(fraction, code)| FractionCode {
                fraction,
                code: code.to_string(),
            })
            .collect(),
        )
    }

    #[test]
    fn test_code_for_known_fraction() {
        let table = letter_table();
        assert_eq!(table.code_for(Fraction::Quarter), "B");
        assert_eq!(table.code_for(Fraction::SevenEighths), "G");
    }

    #[test]
    fn test_missing_fraction_is_whole_number() {
        let table = letter_table();
        assert_eq!(table.code_for(Fraction::Zero), "");
    }
}
