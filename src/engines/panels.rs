//! Panel and link pricing and part number derivation.
//!
//! Panels and links share one entry point but assemble their part numbers
//! differently, and pricing is a strict two-path system: a fixed-dimension
//! override list for stock cuts, and a custom price list matched by
//! dimension rules and face value for everything else. Three legacy sheet
//! behaviours are replicated on purpose and isolated in named functions:
//! the relaxed-rule retry, the lookup-overrun clamp and the link width
//! tier chain's fifth-position not-equal comparison.

use tracing::debug;

use crate::config::{
    money, PANEL_CARTON_QTY, PANEL_DEFAULT_MAX_HEIGHT, PANEL_MAX_WIDTH, PANEL_MIN_DIM,
    PANEL_NO_ANTIMICROBIAL_FAMILY, PRICE_UNAVAILABLE,
};
use crate::model::{PanelKind, PanelQuote, QuoteResult};
use crate::tables::{CustomPriceRow, LinkTier, PanelTables};

use super::rules::{matches_relaxed, matches_rule};

/// Calculate price and part number for one panel or link quote.
pub fn calculate_panels_links(quote: &PanelQuote, tables: &PanelTables) -> QuoteResult {
    let mut result = QuoteResult::new();

    let Some(product) = tables.product_by_name(&quote.family) else {
        result.push_notice("Product not found");
        return result;
    };

    if quote.kind == PanelKind::Link {
        result.link_width_range =
            link_width_range(quote.width_whole, quote.panel_count, &tables.link_tiers);
    }

    // The one family that never takes the antimicrobial add-on keeps the
    // "N/A" part number for both panels and links.
    if quote.family == PANEL_NO_ANTIMICROBIAL_FAMILY && quote.add_on.is_antimicrobial() {
        result.push_notice("Antimicrobial is not available for this product");
        return result;
    }

    result.part_number = build_part_number(quote, &product.prefix, tables);

    let height = quote.total_height();
    let width = quote.total_width();

    // Maximum validation applies to exact cuts only.
    if quote.is_exact {
        let max_height = product.max_height.unwrap_or(PANEL_DEFAULT_MAX_HEIGHT);
        if height > max_height {
            result.push_notice(format!(
                "Height exceeds the {}\" maximum for this product",
                max_height
            ));
        }
        if width > PANEL_MAX_WIDTH {
            result.push_notice(format!("Width exceeds the {}\" maximum", PANEL_MAX_WIDTH));
        }
    }

    // The minimum applies to every cut.
    if height < PANEL_MIN_DIM || width < PANEL_MIN_DIM {
        result.push_notice(format!(
            "Dimensions must be at least {}\" on both axes",
            PANEL_MIN_DIM
        ));
    }

    let validation_failed = result.has_notices();
    let mut price = 0.0;
    let mut fixed_path = false;

    // Path A: fixed-dimension override, stock cuts only. The key ignores
    // fractions by construction.
    if !quote.is_exact && !validation_failed {
        let key = format!("{}X{}", quote.height_whole, quote.width_whole);
        if let Some(value) = tables.fixed_price(&key) {
            debug!(%key, value, "fixed price override hit");
            fixed_path = true;
            match money::parse_price(value) {
                Some(p) => price = p,
                None => result.push_notice(value.to_string()),
            }
        }
    }

    // Path B: custom price list for exact cuts and anything path A missed.
    if !fixed_path && !validation_failed {
        let face = (height * width).ceil();
        match find_custom_row(tables, &product.prefix, height, width, face) {
            Some(row) => {
                let cell = if quote.add_on.is_antimicrobial() {
                    row.at_price.as_str()
                } else {
                    row.price.as_str()
                };
                if quote.add_on.is_antimicrobial() && cell == PRICE_UNAVAILABLE {
                    result.push_notice("Antimicrobial is not available for these dimensions");
                } else {
                    match money::parse_price(cell) {
                        Some(p) => {
                            price = p;
                            if quote.kind == PanelKind::Link {
                                price *= quote.panel_count as f64;
                            }
                        }
                        None => result.push_notice("Price not available for this configuration"),
                    }
                }
            }
            None => result.push_notice("No pricing found for these dimensions"),
        }
    }

    // Any accumulated notice zeroes the price no matter which path set it.
    if result.has_notices() {
        price = 0.0;
    }

    // Fixed-path hits carry no packing information.
    if !fixed_path && price > 0.0 {
        result.carton_qty = match quote.kind {
            PanelKind::Panel => PANEL_CARTON_QTY,
            PanelKind::Link => PANEL_CARTON_QTY / quote.panel_count.max(1),
        };
    }
    result.finalize_price(price);
    result
}

/// Assemble the part number for a panel or link.
fn build_part_number(quote: &PanelQuote, prefix: &str, tables: &PanelTables) -> String {
    let height_code = tables.fractions.code_for(quote.height_fraction);
    let width_code = tables.fractions.code_for(quote.width_fraction);
    let exact_flag = if quote.is_exact { "E" } else { "" };
    let at_suffix = if quote.add_on.is_antimicrobial() {
        "AT"
    } else {
        ""
    };

    match quote.kind {
        PanelKind::Panel => {
            let block = if quote.total_height() > quote.total_width() {
                format!(
                    "{:02}{}{:02}{}",
                    quote.height_whole, height_code, quote.width_whole, width_code
                )
            } else {
                cross_swapped_block(quote, height_code, width_code)
            };
            format!("{}{}{}01{}", prefix, block, exact_flag, at_suffix)
        }
        PanelKind::Link => format!(
            "{}{:02}{}{:02}{}{}{:02}{}",
            prefix,
            quote.height_whole,
            height_code,
            quote.width_whole,
            width_code,
            exact_flag,
            quote.panel_count,
            at_suffix
        ),
    }
}

/// Dimension block for a panel whose width is the larger side: the integer
/// portions swap positions but each keeps the other dimension's fraction
/// code. The sheet has always written it this way.
fn cross_swapped_block(quote: &PanelQuote, height_code: &str, width_code: &str) -> String {
    format!(
        "{:02}{}{:02}{}",
        quote.width_whole, height_code, quote.height_whole, width_code
    )
}

/// Search the custom price list in table order.
///
/// A row whose type matches but where exactly one dimension rule fails is
/// retried with the relaxed rule (upper bounds only). A dimension match
/// whose face value overruns the row's range is still accepted when the
/// next row opens a different dimension bucket, mirroring the legacy
/// lookup tool's clamp-to-last-tier behaviour.
fn find_custom_row<'a>(
    tables: &'a PanelTables,
    prefix: &'a str,
    height: f64,
    width: f64,
    face: f64,
) -> Option<&'a CustomPriceRow> {
    let rows: Vec<&CustomPriceRow> = tables.custom_rows_for(prefix).collect();

    for (pos, row) in rows.iter().enumerate() {
        let mut height_ok = matches_rule(height, &row.height_rule);
        let mut width_ok = matches_rule(width, &row.width_rule);

        if height_ok != width_ok {
            // One dimension missed: re-evaluate it against the upper
            // bounds alone to patch partial-match gaps in the table.
            if height_ok {
                width_ok = matches_relaxed(width, &row.width_rule);
            } else {
                height_ok = matches_relaxed(height, &row.height_rule);
            }
            if height_ok && width_ok {
                debug!(
                    height_rule = %row.height_rule,
                    width_rule = %row.width_rule,
                    "custom row matched via relaxed rule"
                );
            }
        }

        if !(height_ok && width_ok) {
            continue;
        }

        if face >= row.area_from && face <= row.area_to {
            return Some(row);
        }
        if face > row.area_to {
            match rows.get(pos + 1) {
                Some(next) if row.same_bucket(next) => continue,
                _ => {
                    debug!(face, area_to = row.area_to, "clamped to last tier of bucket");
                    return Some(row);
                }
            }
        }
        // Face below the row's range: keep scanning the bucket.
    }
    None
}

/// Button-panel count for a nominal link width.
///
/// The sheet walks seven fixed tiers with strict less-than comparisons,
/// except the fifth, which its author typed as not-equal; the typo ships
/// because customers have part numbers built on it. Past the chain the
/// search is generic and clamps to the final tier instead of failing.
fn link_width_button_panels(nominal: f64, tiers: &[LinkTier]) -> Option<u32> {
    if tiers.is_empty() {
        return None;
    }

    let known = tiers.len().min(7);
    for (pos, tier) in tiers[..known].iter().enumerate() {
        let selected = if pos == 4 {
            // Legacy formula typo: <> where < was meant.
            nominal != tier.length_max
        } else {
            nominal < tier.length_max
        };
        if selected {
            return Some(tier.button_panels);
        }
    }

    for tier in &tiers[known..] {
        if nominal < tier.length_max {
            return Some(tier.button_panels);
        }
    }
    Some(tiers[tiers.len() - 1].button_panels)
}

/// Display string for the achievable link width range.
fn link_width_range(width_whole: u32, panel_count: u32, tiers: &[LinkTier]) -> Option<String> {
    let nominal = (width_whole * panel_count) as i64;
    let buttons = link_width_button_panels(nominal as f64, tiers)? as i64;
    Some(format!("{}-{}\"", nominal - buttons, nominal + buttons))
}
