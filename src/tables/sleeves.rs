//! Reference tables for the sleeves/frames calculator.

use serde::{Deserialize, Serialize};

use super::{FractionTable, LengthTier};

/// One product in the sleeve/frame product master.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleeveProduct {
    pub name: String,
    /// Part number prefix; "072" selects wire ring frame behaviour.
    pub prefix: String,
    /// Option labels offered for this product.
    pub options: Vec<String>,
    pub min_width: f64,
    pub max_width: f64,
    pub min_length: f64,
    pub max_length: f64,
}

/// One face-value tier of the sleeve price table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleevePriceRow {
    pub area_from: f64,
    pub area_to: f64,
    pub standard: f64,
    pub antimicrobial: f64,
}

/// One tier of a wire frame band's price list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameBandRow {
    /// Width band this tier belongs to (1 through 3).
    pub band: u8,
    pub area_max: f64,
    pub price: f64,
}

/// Cross-wire count threshold: frames whose larger whole dimension is at
/// most `max_dim` get `wires` cross wires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireCountRow {
    pub max_dim: f64,
    pub wires: u32,
}

/// Complete reference bundle for the sleeves/frames calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SleeveTables {
    pub products: Vec<SleeveProduct>,
    pub sleeve_prices: Vec<SleevePriceRow>,
    pub frame_prices: Vec<FrameBandRow>,
    pub wire_counts: Vec<WireCountRow>,
    pub sleeve_cartons: Vec<LengthTier>,
    pub fractions: FractionTable,
}

impl SleeveTables {
    /// Product row by exact name.
    pub fn product_by_name(&self, name: &str) -> Option<&SleeveProduct> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Sleeve price tier containing the rounded face value.
    pub fn sleeve_price_row(&self, face: f64) -> Option<&SleevePriceRow> {
        self.sleeve_prices
            .iter()
            .find(|row| face >= row.area_from && face <= row.area_to)
    }

    /// First tier of a frame band whose upper bound covers the face value.
    pub fn frame_price(&self, band: u8, face: f64) -> Option<f64> {
        self.frame_prices
            .iter()
            .find(|row| row.band == band && row.area_max >= face)
            .map(|row| row.price)
    }

    /// Cross-wire count for the larger whole dimension.
    pub fn wire_count(&self, larger_dim: u32) -> Option<u32> {
        self.wire_counts
            .iter()
            .find(|row| row.max_dim >= larger_dim as f64)
            .map(|row| row.wires)
    }

    /// First sleeve carton tier covering a whole length.
    pub fn sleeve_carton_qty(&self, length_whole: u32) -> Option<u32> {
        self.sleeve_cartons
            .iter()
            .find(|tier| tier.length_max >= length_whole as f64)
            .map(|tier| tier.qty)
    }
}
