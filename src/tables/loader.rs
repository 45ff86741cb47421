//! Reference table loader.
//!
//! Reads one named CSV file per table from a directory and builds the typed
//! bundles the calculators consume. Loading happens once per session; the
//! calculators never touch the filesystem.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Result, TableError};
use crate::model::Fraction;

use super::{
    FractionCode, FractionTable, PadTables, PanelTables, PleatPriceRow, PleatTables,
    ReferenceTables, SleeveProduct, SleeveTables,
};

// Table file names, one per concern.
const PLEAT_FAMILIES: &str = "pleat_families.csv";
const PLEAT_THRESHOLDS: &str = "pleat_thresholds.csv";
const PLEAT_OVERRIDES_A: &str = "pleat_overrides_a.csv";
const PLEAT_OVERRIDES_B: &str = "pleat_overrides_b.csv";
const PLEAT_PRICES: &str = "pleat_prices.csv";
const PLEAT_FRACTIONS: &str = "pleat_fractions.csv";
const PANEL_PRODUCTS: &str = "panel_products.csv";
const PANEL_FIXED_PRICES: &str = "panel_fixed_prices.csv";
const PANEL_CUSTOM_PRICES: &str = "panel_custom_prices.csv";
const PANEL_LINK_TIERS: &str = "panel_link_tiers.csv";
const PANEL_FRACTIONS: &str = "panel_fractions.csv";
const PAD_PRODUCTS: &str = "pad_products.csv";
const PAD_WIDTH_CAPS: &str = "pad_width_caps.csv";
const PAD_EXCEPTIONS: &str = "pad_exceptions.csv";
const PAD_SHORT_CARTONS: &str = "pad_short_cartons.csv";
const PAD_CARTON_TIERS: &str = "pad_carton_tiers.csv";
const PAD_PRICES: &str = "pad_prices.csv";
const PAD_FRACTIONS: &str = "pad_fractions.csv";
const SLEEVE_PRODUCTS: &str = "sleeve_products.csv";
const SLEEVE_PRICES: &str = "sleeve_prices.csv";
const FRAME_PRICES: &str = "frame_prices.csv";
const WIRE_COUNTS: &str = "wire_counts.csv";
const SLEEVE_CARTONS: &str = "sleeve_cartons.csv";
const SLEEVE_FRACTIONS: &str = "sleeve_fractions.csv";

/// Load every reference table from a directory.
pub fn load_reference_tables(dir: &Path) -> Result<ReferenceTables> {
    Ok(ReferenceTables {
        pleats: load_pleat_tables(dir)?,
        panels: load_panel_tables(dir)?,
        pads: load_pad_tables(dir)?,
        sleeves: load_sleeve_tables(dir)?,
    })
}

fn load_pleat_tables(dir: &Path) -> Result<PleatTables> {
    let tables = PleatTables {
        families: require_rows(load_rows(dir, PLEAT_FAMILIES)?, PLEAT_FAMILIES)?,
        thresholds: require_rows(load_rows(dir, PLEAT_THRESHOLDS)?, PLEAT_THRESHOLDS)?,
        overrides_a: load_rows(dir, PLEAT_OVERRIDES_A)?,
        overrides_b: load_rows(dir, PLEAT_OVERRIDES_B)?,
        prices: load_pleat_prices(dir)?,
        fractions: load_fraction_table(dir, PLEAT_FRACTIONS)?,
    };
    Ok(tables)
}

fn load_panel_tables(dir: &Path) -> Result<PanelTables> {
    Ok(PanelTables {
        products: require_rows(load_rows(dir, PANEL_PRODUCTS)?, PANEL_PRODUCTS)?,
        fixed_prices: load_rows(dir, PANEL_FIXED_PRICES)?,
        custom_prices: require_rows(load_rows(dir, PANEL_CUSTOM_PRICES)?, PANEL_CUSTOM_PRICES)?,
        link_tiers: require_rows(load_rows(dir, PANEL_LINK_TIERS)?, PANEL_LINK_TIERS)?,
        fractions: load_fraction_table(dir, PANEL_FRACTIONS)?,
    })
}

fn load_pad_tables(dir: &Path) -> Result<PadTables> {
    Ok(PadTables {
        products: require_rows(load_rows(dir, PAD_PRODUCTS)?, PAD_PRODUCTS)?,
        width_caps: load_rows(dir, PAD_WIDTH_CAPS)?,
        exceptions: load_rows(dir, PAD_EXCEPTIONS)?,
        short_cartons: load_rows(dir, PAD_SHORT_CARTONS)?,
        carton_tiers: require_rows(load_rows(dir, PAD_CARTON_TIERS)?, PAD_CARTON_TIERS)?,
        prices: require_rows(load_rows(dir, PAD_PRICES)?, PAD_PRICES)?,
        fractions: load_fraction_table(dir, PAD_FRACTIONS)?,
    })
}

fn load_sleeve_tables(dir: &Path) -> Result<SleeveTables> {
    Ok(SleeveTables {
        products: require_rows(load_sleeve_products(dir)?, SLEEVE_PRODUCTS)?,
        sleeve_prices: require_rows(load_rows(dir, SLEEVE_PRICES)?, SLEEVE_PRICES)?,
        frame_prices: require_rows(load_rows(dir, FRAME_PRICES)?, FRAME_PRICES)?,
        wire_counts: require_rows(load_rows(dir, WIRE_COUNTS)?, WIRE_COUNTS)?,
        sleeve_cartons: require_rows(load_rows(dir, SLEEVE_CARTONS)?, SLEEVE_CARTONS)?,
        fractions: load_fraction_table(dir, SLEEVE_FRACTIONS)?,
    })
}

/// Deserialize every row of one CSV file.
fn load_rows<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    if !path.exists() {
        return Err(TableError::TableNotFound { path });
    }

    let mut reader = csv::Reader::from_path(&path).map_err(|e| TableError::Csv {
        table: file.to_string(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|e| TableError::Csv {
            table: file.to_string(),
            source: e,
        })?);
    }
    Ok(rows)
}

/// Reject an empty table where the calculators need at least one row.
fn require_rows<T>(rows: Vec<T>, file: &str) -> Result<Vec<T>> {
    if rows.is_empty() {
        return Err(TableError::EmptyTable {
            table: file.to_string(),
        });
    }
    Ok(rows)
}

/// Raw fraction-code row before enum conversion.
#[derive(Debug, Deserialize)]
struct RawFractionCode {
    value: f64,
    code: String,
}

fn load_fraction_table(dir: &Path, file: &str) -> Result<FractionTable> {
    let raw: Vec<RawFractionCode> = load_rows(dir, file)?;
    let mut rows = Vec::with_capacity(raw.len());
    for (i, row) in raw.into_iter().enumerate() {
        let fraction =
            Fraction::from_decimal(row.value).ok_or_else(|| TableError::InvalidFraction {
                table: file.to_string(),
                row: i + 2, // 1-based, after the header line
                value: row.value.to_string(),
            })?;
        rows.push(FractionCode {
            fraction,
            code: row.code,
        });
    }
    Ok(FractionTable::new(rows))
}

/// The pleat price matrix keeps its cells under their original column
/// names, so rows come in as maps and the three fixed columns are peeled
/// off by hand.
fn load_pleat_prices(dir: &Path) -> Result<Vec<PleatPriceRow>> {
    let raw: Vec<HashMap<String, String>> = load_rows(dir, PLEAT_PRICES)?;
    let raw = require_rows(raw, PLEAT_PRICES)?;

    let mut rows = Vec::with_capacity(raw.len());
    for (i, mut map) in raw.into_iter().enumerate() {
        let row_num = i + 2;
        let prefix = take_column(&mut map, "prefix", PLEAT_PRICES)?;
        let area_from = parse_number(take_column(&mut map, "area_from", PLEAT_PRICES)?, PLEAT_PRICES, row_num)?;
        let area_to = parse_number(take_column(&mut map, "area_to", PLEAT_PRICES)?, PLEAT_PRICES, row_num)?;
        rows.push(PleatPriceRow {
            prefix,
            area_from,
            area_to,
            cells: map,
        });
    }
    Ok(rows)
}

/// Raw sleeve product row; options are pipe-separated in the CSV.
#[derive(Debug, Deserialize)]
struct RawSleeveProduct {
    name: String,
    prefix: String,
    options: String,
    min_width: f64,
    max_width: f64,
    min_length: f64,
    max_length: f64,
}

fn load_sleeve_products(dir: &Path) -> Result<Vec<SleeveProduct>> {
    let raw: Vec<RawSleeveProduct> = load_rows(dir, SLEEVE_PRODUCTS)?;
    Ok(raw
        .into_iter()
        .map(|row| SleeveProduct {
            name: row.name,
            prefix: row.prefix,
            options: row
                .options
                .split('|')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            min_width: row.min_width,
            max_width: row.max_width,
            min_length: row.min_length,
            max_length: row.max_length,
        })
        .collect())
}

fn take_column(
    map: &mut HashMap<String, String>,
    column: &str,
    table: &str,
) -> Result<String> {
    map.remove(column).ok_or_else(|| TableError::MissingColumn {
        table: table.to_string(),
        column: column.to_string(),
    })
}

fn parse_number(value: String, table: &str, row: usize) -> Result<f64> {
    value.parse().map_err(|_| TableError::InvalidNumber {
        table: table.to_string(),
        row,
        value,
    })
}
