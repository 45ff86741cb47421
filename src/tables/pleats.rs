//! Reference tables for the pleats calculator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::FractionTable;

/// One product family in the pleat family master.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PleatFamily {
    pub name: String,
    /// Numeric-looking part number prefix; kept as a string.
    pub prefix: String,
}

/// Standard and oversize width/length thresholds for one pleat depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthThresholds {
    pub depth: u8,
    pub std_width: f64,
    pub std_length: f64,
    pub over_width: f64,
    pub over_length: f64,
}

/// One row of a dimension-keyed override table. The value is either a
/// literal price or a message for the sales rep; the calculator never
/// parses it, it only surfaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionOverride {
    pub key: String,
    pub value: String,
}

/// One row of the tiered pleat price matrix.
///
/// Price cells stay as strings under their original column names
/// ("1_Update" through "3_Triple") because non-numeric cells are meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PleatPriceRow {
    pub prefix: String,
    pub area_from: f64,
    pub area_to: f64,
    pub cells: HashMap<String, String>,
}

impl PleatPriceRow {
    /// Price cell for a size code and column suffix, e.g. (1, "Update")
    /// reads the "1_Update" column.
    pub fn cell(&self, code: u8, suffix: &str) -> Option<&str> {
        self.cells
            .get(&format!("{}_{}", code, suffix))
            .map(String::as_str)
    }
}

/// Complete reference bundle for the pleats calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PleatTables {
    pub families: Vec<PleatFamily>,
    pub thresholds: Vec<DepthThresholds>,
    pub overrides_a: Vec<DimensionOverride>,
    pub overrides_b: Vec<DimensionOverride>,
    pub prices: Vec<PleatPriceRow>,
    pub fractions: FractionTable,
}

impl PleatTables {
    /// Family row by exact name.
    pub fn family_by_name(&self, name: &str) -> Option<&PleatFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Threshold row for a depth.
    pub fn thresholds_for_depth(&self, depth: u8) -> Option<&DepthThresholds> {
        self.thresholds.iter().find(|t| t.depth == depth)
    }

    /// Override row by exact dimension key in the given table.
    pub fn find_override<'a>(
        overrides: &'a [DimensionOverride],
        key: &str,
    ) -> Option<&'a DimensionOverride> {
        overrides.iter().find(|row| row.key == key)
    }

    /// Tiered price row for a family prefix containing the face value.
    pub fn price_row(&self, prefix: &str, face: f64) -> Option<&PleatPriceRow> {
        self.prices
            .iter()
            .find(|row| row.prefix == prefix && face >= row.area_from && face <= row.area_to)
    }
}
