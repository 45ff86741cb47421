//! Reference tables for the panels/links calculator.

use serde::{Deserialize, Serialize};

use super::FractionTable;

/// One product in the panel/link product master.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelProduct {
    pub name: String,
    /// Part number prefix; string to preserve leading zeros.
    pub prefix: String,
    /// Per-family maximum height for exact cuts; None falls back to the
    /// calculator default.
    pub max_height: Option<f64>,
}

/// One row of the fixed-dimension price override table, keyed by the
/// whole-inch "HxW" pair. Non-numeric values are messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedPriceRow {
    pub key: String,
    pub value: String,
}

/// One row of the custom price list.
///
/// Height and width rules are semicolon-joined comparison expressions
/// (`">34;<78"`) or the literal "ALL". Price cells keep their currency
/// formatting; the antimicrobial cell may be the "N/A" sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPriceRow {
    pub type_prefix: String,
    pub height_rule: String,
    pub width_rule: String,
    pub area_from: f64,
    pub area_to: f64,
    pub price: String,
    pub at_price: String,
}

impl CustomPriceRow {
    /// Rows belong to the same dimension bucket when type and both rules
    /// match; consecutive rows of a bucket differ only in face range.
    pub fn same_bucket(&self, other: &CustomPriceRow) -> bool {
        self.type_prefix == other.type_prefix
            && self.height_rule == other.height_rule
            && self.width_rule == other.width_rule
    }
}

/// One tier of the link width table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTier {
    pub length_max: f64,
    pub button_panels: u32,
}

/// Complete reference bundle for the panels/links calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelTables {
    pub products: Vec<PanelProduct>,
    pub fixed_prices: Vec<FixedPriceRow>,
    pub custom_prices: Vec<CustomPriceRow>,
    pub link_tiers: Vec<LinkTier>,
    pub fractions: FractionTable,
}

impl PanelTables {
    /// Product row by exact name.
    pub fn product_by_name(&self, name: &str) -> Option<&PanelProduct> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Fixed override value by exact dimension key.
    pub fn fixed_price(&self, key: &str) -> Option<&str> {
        self.fixed_prices
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
    }

    /// Custom price rows for a product prefix, in table order.
    pub fn custom_rows_for<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a CustomPriceRow> + 'a {
        self.custom_prices
            .iter()
            .filter(move |row| row.type_prefix == prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(rule_h: &str, rule_w: &str, from: f64, to: f64) -> CustomPriceRow {
        CustomPriceRow {
            type_prefix: "301".to_string(),
            height_rule: rule_h.to_string(),
            width_rule: rule_w.to_string(),
            area_from: from,
            area_to: to,
            price: "$10.00".to_string(),
            at_price: "$12.00".to_string(),
        }
    }

    #[test]
    fn test_same_bucket() {
        let a = row("ALL", "<36", 0.0, 864.0);
        let b = row("ALL", "<36", 865.0, 1728.0);
        let c = row("ALL", ">=36;<78", 0.0, 864.0);
        assert!(a.same_bucket(&b));
        assert!(!a.same_bucket(&c));
    }

    #[test]
    fn test_fixed_price_lookup() {
        let tables = PanelTables {
            fixed_prices: vec![FixedPriceRow {
                key: "24X36".to_string(),
                value: "41.50".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(tables.fixed_price("24X36"), Some("41.50"));
        assert_eq!(tables.fixed_price("24X37"), None);
    }
}
