//! Media pad pricing and part number derivation.
//!
//! Pads are the lenient calculator: apart from one hard stop (asking for
//! antimicrobial on a product that cannot have it), everything else is a
//! notice and the calculation runs to the end, pricing included. Dimension
//! validation runs twice - a strict pass, then a quarter-inch tolerance
//! pass that downgrades the failure to a note.

use tracing::debug;

use crate::config::{
    money, PAD_ANTIMICROBIAL_PREFIXES, PAD_SHORT_LENGTH_CUTOFF, PAD_SOFT_TOLERANCE,
};
use crate::model::{PadQuote, QuoteResult};
use crate::tables::PadTables;

/// Calculate price and part number for one media pad quote.
pub fn calculate_pads(quote: &PadQuote, tables: &PadTables) -> QuoteResult {
    let Some(product) = tables.product_by_name(&quote.product) else {
        return QuoteResult::hard_error("Product not found");
    };

    // The only hard stop: antimicrobial on a product outside the
    // allow-list. Nothing else is computed, not even the part number.
    if quote.add_on.is_antimicrobial()
        && !PAD_ANTIMICROBIAL_PREFIXES.contains(&product.prefix.as_str())
    {
        return QuoteResult::hard_error("Antimicrobial is not available for this product");
    }

    let mut result = QuoteResult::new();

    // Four special prefixes cap their width below the generic maximum.
    let max_width = tables
        .width_cap(&product.prefix)
        .unwrap_or(product.max_width);

    let width = quote.total_width();
    let length = quote.total_length();

    check_dimension(&mut result, "Width", width, product.min_width, max_width);
    check_dimension(
        &mut result,
        "Length",
        length,
        product.min_length,
        product.max_length,
    );

    // The part number never depends on price validity.
    result.part_number = format!(
        "{}{:02}{}{:02}{}{}",
        product.prefix,
        quote.width_whole,
        tables.fractions.code_for(quote.width_fraction),
        quote.length_whole,
        tables.fractions.code_for(quote.length_fraction),
        if quote.add_on.is_antimicrobial() {
            "AT"
        } else {
            ""
        }
    );

    // Standard-part shortcut: whole dimensions on the default option may
    // map to a known stock part. The message replaces the price, but the
    // standard carton quantity still ships with the note.
    if quote.width_fraction.is_zero()
        && quote.length_fraction.is_zero()
        && !quote.add_on.is_antimicrobial()
    {
        let key = format!(
            "{}{}{}",
            product.prefix, quote.width_whole, quote.length_whole
        );
        if let Some(message) = tables.exception(&key) {
            debug!(%key, "standard part override hit");
            result.push_notice(message.to_string());
            result.carton_qty = product.carton_qty;
            return result;
        }
    }

    // Carton quantity: short cuts use the per-prefix table, everything
    // else walks the universal length tiers.
    let carton_qty = if length < PAD_SHORT_LENGTH_CUTOFF {
        tables.short_carton_qty(&product.prefix)
    } else {
        tables.carton_tier_qty(quote.length_whole)
    };
    match carton_qty {
        Some(qty) => result.carton_qty = qty,
        None => result.push_notice("No carton quantity found for this length"),
    }

    // Face-area pricing from the option's sub-column.
    let face = width * length;
    let price = match tables.price_row(&product.prefix, face) {
        Some(row) => {
            let cell = if quote.add_on.is_antimicrobial() {
                row.antimicrobial.as_str()
            } else {
                row.standard.as_str()
            };
            match money::parse_price(cell) {
                Some(p) if p > 0.0 => Some(p),
                _ => {
                    result.push_notice("Price not available for this configuration");
                    None
                }
            }
        }
        None => {
            result.push_notice("Dimensions out of range for pricing");
            None
        }
    };

    // Price and carton fields populate even next to notices; the caller
    // decides what to show.
    if let Some(price) = price {
        result.finalize_price(price);
    }
    result
}

/// Strict range check with a tolerance second pass. A miss inside the
/// tolerance band is a note; a miss outside it is a louder note, but
/// neither stops the calculation.
fn check_dimension(result: &mut QuoteResult, label: &str, value: f64, min: f64, max: f64) {
    if value >= min && value <= max {
        return;
    }
    if value >= min - PAD_SOFT_TOLERANCE && value <= max + PAD_SOFT_TOLERANCE {
        result.push_notice(format!("{} is outside the standard range", label));
    } else {
        result.push_notice(format!("{} is out of range", label));
    }
}
