//! The result record returned by every calculator.

use serde::{Deserialize, Serialize};

use crate::config::{money, NO_PART};

/// Outcome of one pricing calculation.
///
/// Notices accumulate in evaluation order; there is no severity flag. A hard
/// failure is recognisable by its shape: the calculator short-circuited and
/// left price, carton quantity and carton price at zero. Soft notices may sit
/// next to a fully computed price (the pads calculator in particular keeps
/// pricing a cut whose dimensions only passed the tolerance check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Generated part number, or "N/A" when none was produced.
    pub part_number: String,
    /// Unit price; 0 when unresolved.
    pub price: f64,
    /// Units per carton; 0 when unresolved.
    pub carton_qty: u32,
    /// Price of a full carton; 0 when unresolved.
    pub carton_price: f64,
    /// Range-of-link-width display string, links only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_width_range: Option<String>,
    /// Validation and business-exception notices, in evaluation order.
    pub notices: Vec<String>,
}

impl Default for QuoteResult {
    fn default() -> Self {
        Self {
            part_number: NO_PART.to_string(),
            price: 0.0,
            carton_qty: 0,
            carton_price: 0.0,
            link_width_range: None,
            notices: Vec::new(),
        }
    }
}

impl QuoteResult {
    /// Empty result with the "N/A" part number.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminal result for a hard failure: one notice, everything else at
    /// its zero default.
    pub fn hard_error(message: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.notices.push(message.into());
        result
    }

    /// Append a notice.
    pub fn push_notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    /// Set the unit price and derive the carton price from the current
    /// carton quantity. Carton price stays zero unless both parts are
    /// positive.
    pub fn finalize_price(&mut self, price: f64) {
        self.price = money::round2(price);
        self.carton_price = if self.price > 0.0 && self.carton_qty > 0 {
            money::round2(self.price * self.carton_qty as f64)
        } else {
            0.0
        };
    }

    /// Whether any notice has been recorded.
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_na() {
        let result = QuoteResult::new();
        assert_eq!(result.part_number, "N/A");
        assert_eq!(result.price, 0.0);
        assert_eq!(result.carton_qty, 0);
        assert_eq!(result.carton_price, 0.0);
        assert!(!result.has_notices());
    }

    #[test]
    fn test_hard_error_zeroes_fields() {
        let result = QuoteResult::hard_error("Product not found");
        assert_eq!(result.price, 0.0);
        assert_eq!(result.carton_price, 0.0);
        assert_eq!(result.notices, vec!["Product not found".to_string()]);
    }

    #[test]
    fn test_finalize_price_rounds_carton() {
        let mut result = QuoteResult::new();
        result.carton_qty = 12;
        result.finalize_price(10.333);
        assert_eq!(result.price, 10.33);
        assert_eq!(result.carton_price, 123.96);
    }

    #[test]
    fn test_finalize_price_zero_qty_keeps_carton_zero() {
        let mut result = QuoteResult::new();
        result.finalize_price(10.0);
        assert_eq!(result.price, 10.0);
        assert_eq!(result.carton_price, 0.0);
    }
}
