//! Typed reference tables for the four calculators.
//!
//! Every table is loaded once from tabular files and is immutable for the
//! lifetime of a calculation. Column names and string typing mirror the
//! source sheets exactly; prefix columns in particular stay strings so
//! leading zeros survive.

mod fractions;
mod loader;
mod pads;
mod panels;
mod pleats;
mod sleeves;

pub use fractions::{FractionCode, FractionTable};
pub use loader::load_reference_tables;
pub use pads::{
    LengthTier, PadPriceRow, PadProduct, PadTables, ShortLengthCarton, StandardPartOverride,
    WidthCap,
};
pub use panels::{CustomPriceRow, FixedPriceRow, LinkTier, PanelProduct, PanelTables};
pub use pleats::{DepthThresholds, DimensionOverride, PleatFamily, PleatPriceRow, PleatTables};
pub use sleeves::{FrameBandRow, SleevePriceRow, SleeveProduct, SleeveTables, WireCountRow};

use serde::{Deserialize, Serialize};

/// Every reference table the calculators need, loaded as one bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub pleats: PleatTables,
    pub panels: PanelTables,
    pub pads: PadTables,
    pub sleeves: SleeveTables,
}
