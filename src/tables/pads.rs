//! Reference tables for the pads calculator.

use serde::{Deserialize, Serialize};

use super::FractionTable;

/// One product in the pad product master.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadProduct {
    pub name: String,
    /// Part number prefix; string to preserve leading zeros.
    pub prefix: String,
    pub min_width: f64,
    pub max_width: f64,
    pub min_length: f64,
    pub max_length: f64,
    /// Standard carton quantity, used by the standard-part shortcut.
    pub carton_qty: u32,
}

/// Width cap for one of the special prefixes; takes precedence over the
/// product master's generic maximum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidthCap {
    pub prefix: String,
    pub max_width: f64,
}

/// Standard-part exception keyed by the concatenated prefix+width+length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardPartOverride {
    pub key: String,
    pub message: String,
}

/// Per-prefix carton quantity for cuts under the short-length cutoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLengthCarton {
    pub prefix: String,
    pub qty: u32,
}

/// One tier of a length-keyed carton table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthTier {
    pub length_max: f64,
    pub qty: u32,
}

/// One row of the pad price matrix, split into the standard and
/// antimicrobial sub-columns. Cells stay as strings: a "0" in the
/// antimicrobial column means the option is not priced for that tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadPriceRow {
    pub prefix: String,
    pub area_from: f64,
    pub area_to: f64,
    pub standard: String,
    pub antimicrobial: String,
}

/// Complete reference bundle for the pads calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PadTables {
    pub products: Vec<PadProduct>,
    pub width_caps: Vec<WidthCap>,
    pub exceptions: Vec<StandardPartOverride>,
    pub short_cartons: Vec<ShortLengthCarton>,
    pub carton_tiers: Vec<LengthTier>,
    pub prices: Vec<PadPriceRow>,
    pub fractions: FractionTable,
}

impl PadTables {
    /// Product row by exact name.
    pub fn product_by_name(&self, name: &str) -> Option<&PadProduct> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Width cap for a prefix, if it is one of the special prefixes.
    pub fn width_cap(&self, prefix: &str) -> Option<f64> {
        self.width_caps
            .iter()
            .find(|cap| cap.prefix == prefix)
            .map(|cap| cap.max_width)
    }

    /// Standard-part exception by exact key.
    pub fn exception(&self, key: &str) -> Option<&str> {
        self.exceptions
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.message.as_str())
    }

    /// Short-length carton quantity for a prefix.
    pub fn short_carton_qty(&self, prefix: &str) -> Option<u32> {
        self.short_cartons
            .iter()
            .find(|row| row.prefix == prefix)
            .map(|row| row.qty)
    }

    /// First universal carton tier covering a whole length.
    pub fn carton_tier_qty(&self, length_whole: u32) -> Option<u32> {
        self.carton_tiers
            .iter()
            .find(|tier| tier.length_max >= length_whole as f64)
            .map(|tier| tier.qty)
    }

    /// Price row for a prefix containing the face value.
    pub fn price_row(&self, prefix: &str, face: f64) -> Option<&PadPriceRow> {
        self.prices
            .iter()
            .find(|row| row.prefix == prefix && face >= row.area_from && face <= row.area_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_width_cap_precedence_lookup() {
        let tables = PadTables {
            width_caps: vec![WidthCap {
                prefix: "033".to_string(),
                max_width: 70.0,
            }],
            ..Default::default()
        };
        assert_eq!(tables.width_cap("033"), Some(70.0));
        assert_eq!(tables.width_cap("010"), None);
    }

    #[test]
    fn test_carton_tier_walk() {
        let tables = PadTables {
            carton_tiers: vec![
                LengthTier {
                    length_max: 36.0,
                    qty: 24,
                },
                LengthTier {
                    length_max: 72.0,
                    qty: 12,
                },
            ],
            ..Default::default()
        };
        assert_eq!(tables.carton_tier_qty(30), Some(24));
        assert_eq!(tables.carton_tier_qty(36), Some(24));
        assert_eq!(tables.carton_tier_qty(37), Some(12));
        assert_eq!(tables.carton_tier_qty(80), None);
    }
}
