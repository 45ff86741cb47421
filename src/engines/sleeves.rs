//! Sleeve and wire ring frame pricing and part number derivation.
//!
//! Both sub-products share this calculator; the fixed "072" prefix selects
//! frame behaviour. Unlike pads there is no tolerance band: any validation
//! failure stops before a part number exists. Errors found later preserve
//! whatever was already computed for diagnostics but never finalise a
//! price.

use tracing::debug;

use crate::config::{
    ANTIMICROBIAL_OPTION, FRAME_BAND_1_MAX, FRAME_BAND_2_MAX, FRAME_BAND_3_MAX,
    FRAME_BAND_MIN_WIDTH, FRAME_CARTON_QTY, FRAME_PREFIX, STANDARD_OPTION,
};
use crate::model::{QuoteResult, SleeveQuote};
use crate::tables::SleeveTables;

/// Calculate price and part number for one sleeve or wire frame quote.
pub fn calculate_sleeves(quote: &SleeveQuote, tables: &SleeveTables) -> QuoteResult {
    let Some(product) = tables.product_by_name(&quote.product) else {
        return QuoteResult::hard_error("Product not found");
    };

    // Validation stops everything, identifier included.
    if !product.options.iter().any(|o| o == &quote.option) {
        return QuoteResult::hard_error("Selected option is not available for this product");
    }
    let width = quote.total_width();
    let length = quote.total_length();
    if width < product.min_width || width > product.max_width {
        return QuoteResult::hard_error("Width is out of range");
    }
    if length < product.min_length || length > product.max_length {
        return QuoteResult::hard_error("Length is out of range");
    }

    let is_frame = product.prefix == FRAME_PREFIX;
    let mut result = QuoteResult::new();

    result.part_number = format!(
        "{}{:02}{}{:02}{}{}",
        product.prefix,
        quote.width_whole,
        tables.fractions.code_for(quote.width_fraction),
        quote.length_whole,
        tables.fractions.code_for(quote.length_fraction),
        if quote.option == STANDARD_OPTION {
            ""
        } else {
            "AT"
        }
    );

    if is_frame {
        // Frames carry a cross-wire suffix keyed by the larger dimension.
        let larger = quote.width_whole.max(quote.length_whole);
        match tables.wire_count(larger) {
            Some(wires) => {
                result.part_number = format!("{}-{}CW", result.part_number, wires);
            }
            None => {
                result.push_notice("No cross-wire count found for this size");
                return result;
            }
        }
    }

    // Carton quantity before pricing, so a pricing miss still reports it.
    if is_frame {
        result.carton_qty = FRAME_CARTON_QTY;
    } else {
        match tables.sleeve_carton_qty(quote.length_whole) {
            Some(qty) => result.carton_qty = qty,
            None => {
                result.push_notice("No carton quantity found for this length");
                return result;
            }
        }
    }

    let face = (width * length).round();
    let price = if is_frame {
        frame_price(&mut result, tables, width, face)
    } else {
        sleeve_price(&mut result, tables, &quote.option, face)
    };

    if let Some(price) = price {
        debug!(face, price, is_frame, "sleeve price resolved");
        result.finalize_price(price);
    }
    result
}

/// Wire frame pricing: classify the width into one of three fixed bands,
/// then take the first tier of that band covering the face value.
fn frame_price(
    result: &mut QuoteResult,
    tables: &SleeveTables,
    width: f64,
    face: f64,
) -> Option<f64> {
    let Some(band) = frame_width_band(width) else {
        result.push_notice("Width is out of range for wire frames");
        return None;
    };
    match tables.frame_price(band, face) {
        Some(price) => Some(price),
        None => {
            result.push_notice("Dimensions out of range");
            None
        }
    }
}

/// The three frame width bands from the wire-frame price sheet.
fn frame_width_band(width: f64) -> Option<u8> {
    if (FRAME_BAND_MIN_WIDTH..=FRAME_BAND_1_MAX).contains(&width) {
        Some(1)
    } else if width > FRAME_BAND_1_MAX && width <= FRAME_BAND_2_MAX {
        Some(2)
    } else if width > FRAME_BAND_2_MAX && width <= FRAME_BAND_3_MAX {
        Some(3)
    } else {
        None
    }
}

/// Sleeve pricing: the face tier's standard or antimicrobial column.
fn sleeve_price(
    result: &mut QuoteResult,
    tables: &SleeveTables,
    option: &str,
    face: f64,
) -> Option<f64> {
    match tables.sleeve_price_row(face) {
        Some(row) => Some(if option == ANTIMICROBIAL_OPTION {
            row.antimicrobial
        } else {
            row.standard
        }),
        None => {
            result.push_notice("Dimensions out of range");
            None
        }
    }
}
