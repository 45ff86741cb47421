//! Quote input records, one per product family.
//!
//! A quote input is constructed fresh for every calculation and discarded
//! afterwards; the calculators never mutate it.

use serde::{Deserialize, Serialize};

use super::Fraction;

/// Add-on selection shared by every calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AddOn {
    /// "None (Standard)"
    #[default]
    Standard,
    /// Antimicrobial treatment.
    Antimicrobial,
}

impl AddOn {
    pub fn is_antimicrobial(&self) -> bool {
        matches!(self, AddOn::Antimicrobial)
    }
}

/// Whether a panels/links quote is for a single panel or a linked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelKind {
    #[default]
    Panel,
    Link,
}

/// Quote input for the pleats calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PleatQuote {
    /// Product family, matched exactly against the family master.
    pub family: String,
    pub width_whole: u32,
    pub width_fraction: Fraction,
    pub length_whole: u32,
    pub length_fraction: Fraction,
    /// Pleat depth in inches (1, 2 or 4).
    pub depth: u8,
    /// Whether the cut will be made exact.
    pub is_exact: bool,
}

/// Quote input for the panels/links calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelQuote {
    pub family: String,
    pub add_on: AddOn,
    pub kind: PanelKind,
    /// Number of panels in a link; ignored for single panels.
    pub panel_count: u32,
    pub is_exact: bool,
    pub height_whole: u32,
    pub height_fraction: Fraction,
    pub width_whole: u32,
    pub width_fraction: Fraction,
}

/// Quote input for the pads calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PadQuote {
    pub product: String,
    pub add_on: AddOn,
    pub width_whole: u32,
    pub width_fraction: Fraction,
    pub length_whole: u32,
    pub length_fraction: Fraction,
}

/// Quote input for the sleeves/frames calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SleeveQuote {
    pub product: String,
    /// Option label as shown to the customer, e.g. "None (Standard)".
    pub option: String,
    pub width_whole: u32,
    pub width_fraction: Fraction,
    pub length_whole: u32,
    pub length_fraction: Fraction,
}

impl PleatQuote {
    /// Total width including the fractional component.
    pub fn total_width(&self) -> f64 {
        self.width_whole as f64 + self.width_fraction.value()
    }

    /// Total length including the fractional component.
    pub fn total_length(&self) -> f64 {
        self.length_whole as f64 + self.length_fraction.value()
    }
}

impl PanelQuote {
    pub fn total_height(&self) -> f64 {
        self.height_whole as f64 + self.height_fraction.value()
    }

    pub fn total_width(&self) -> f64 {
        self.width_whole as f64 + self.width_fraction.value()
    }
}

impl PadQuote {
    pub fn total_width(&self) -> f64 {
        self.width_whole as f64 + self.width_fraction.value()
    }

    pub fn total_length(&self) -> f64 {
        self.length_whole as f64 + self.length_fraction.value()
    }
}

impl SleeveQuote {
    pub fn total_width(&self) -> f64 {
        self.width_whole as f64 + self.width_fraction.value()
    }

    pub fn total_length(&self) -> f64 {
        self.length_whole as f64 + self.length_fraction.value()
    }
}
