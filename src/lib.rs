//! nat-calc - pricing and part number calculator for custom-cut filter
//! products.
//!
//! Four product families (pleats, panels/links, pads, sleeves/frames) each
//! get a deterministic calculator that turns physical dimensions and
//! options into a part number, unit price, carton quantity and carton
//! price, driven entirely by tabular reference data that mirrors the
//! legacy price sheets.
//!
//! # Example
//!
//! ```no_run
//! use nat_calc::{calculate_pleat_price, load_reference_tables, PleatQuote};
//! use std::path::Path;
//!
//! let tables = load_reference_tables(Path::new("tables")).unwrap();
//! let quote = PleatQuote {
//!     family: "Nova Pleat MERV 8".to_string(),
//!     width_whole: 24,
//!     length_whole: 36,
//!     depth: 2,
//!     ..Default::default()
//! };
//! let result = calculate_pleat_price(&quote, &tables.pleats);
//! println!("{}: ${:.2}", result.part_number, result.price);
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod model;
pub mod tables;

// Re-exports for convenience
pub use engines::{calculate_pads, calculate_panels_links, calculate_pleat_price, calculate_sleeves};
pub use error::{Result, TableError};
pub use model::{
    AddOn, Fraction, PadQuote, PanelKind, PanelQuote, PleatQuote, QuoteResult, SleeveQuote,
};
pub use tables::{load_reference_tables, ReferenceTables};

/// A quote request for any of the four product families.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum QuoteRequest {
    Pleat(PleatQuote),
    Panel(PanelQuote),
    Pad(PadQuote),
    Sleeve(SleeveQuote),
}

/// Run the matching calculator for a quote request.
///
/// This is the single entry point a front end needs: it dispatches to the
/// family's calculator and returns the complete result record.
pub fn calculate(request: &QuoteRequest, tables: &ReferenceTables) -> QuoteResult {
    match request {
        QuoteRequest::Pleat(quote) => calculate_pleat_price(quote, &tables.pleats),
        QuoteRequest::Panel(quote) => calculate_panels_links(quote, &tables.panels),
        QuoteRequest::Pad(quote) => calculate_pads(quote, &tables.pads),
        QuoteRequest::Sleeve(quote) => calculate_sleeves(quote, &tables.sleeves),
    }
}
