//! nat-calc - CLI front end for the filter product pricing calculators.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nat_calc::{
    calculate, load_reference_tables, AddOn, Fraction, PadQuote, PanelKind, PanelQuote,
    PleatQuote, QuoteRequest, SleeveQuote,
};

/// Price custom-cut filter products from the reference tables.
#[derive(Parser, Debug)]
#[command(name = "nat-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the reference table CSV files
    #[arg(short, long)]
    tables: PathBuf,

    /// Output the full result as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a pleated filter
    Pleats {
        /// Product family name, exactly as in the family master
        #[arg(long)]
        family: String,
        /// Width in inches (whole plus an eighth-inch fraction)
        #[arg(long)]
        width: f64,
        /// Length in inches
        #[arg(long)]
        length: f64,
        /// Pleat depth in inches (1, 2 or 4)
        #[arg(long, default_value = "2")]
        depth: u8,
        /// Cut will be made exact
        #[arg(long)]
        exact: bool,
    },
    /// Price a panel or link set
    Panels {
        /// Product family name
        #[arg(long)]
        family: String,
        /// Height in inches
        #[arg(long)]
        height: f64,
        /// Width in inches
        #[arg(long)]
        width: f64,
        /// Quote a link set instead of a single panel
        #[arg(long)]
        link: bool,
        /// Number of panels in the link set
        #[arg(long, default_value = "2")]
        panels: u32,
        /// Antimicrobial add-on
        #[arg(long)]
        antimicrobial: bool,
        /// Cut will be made exact
        #[arg(long)]
        exact: bool,
    },
    /// Price a media pad
    Pads {
        /// Product name
        #[arg(long)]
        product: String,
        /// Width in inches
        #[arg(long)]
        width: f64,
        /// Length in inches
        #[arg(long)]
        length: f64,
        /// Antimicrobial add-on
        #[arg(long)]
        antimicrobial: bool,
    },
    /// Price a pre-cut sleeve or wire ring frame
    Sleeves {
        /// Product name
        #[arg(long)]
        product: String,
        /// Width in inches
        #[arg(long)]
        width: f64,
        /// Length in inches
        #[arg(long)]
        length: f64,
        /// Option label
        #[arg(long, default_value = "None (Standard)")]
        option: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Loading reference tables from {}", args.tables.display());
    let tables = load_reference_tables(&args.tables)
        .with_context(|| format!("Failed to load tables from {}", args.tables.display()))?;

    let request = build_request(&args.command)?;
    let result = calculate(&request, &tables);

    for notice in &result.notices {
        warn!("{}", notice);
    }

    if args.debug {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Part Number:     {}", result.part_number);
    println!("Price:           ${:.2}", result.price);
    println!("Carton Quantity: {}", result.carton_qty);
    println!("Carton Price:    ${:.2}", result.carton_price);
    if let Some(range) = &result.link_width_range {
        println!("Link Width:      {}", range);
    }

    Ok(())
}

/// Turn the parsed subcommand into a quote request.
fn build_request(command: &Command) -> Result<QuoteRequest> {
    let request = match command {
        Command::Pleats {
            family,
            width,
            length,
            depth,
            exact,
        } => {
            let (width_whole, width_fraction) = split_dimension("width", *width)?;
            let (length_whole, length_fraction) = split_dimension("length", *length)?;
            QuoteRequest::Pleat(PleatQuote {
                family: family.clone(),
                width_whole,
                width_fraction,
                length_whole,
                length_fraction,
                depth: *depth,
                is_exact: *exact,
            })
        }
        Command::Panels {
            family,
            height,
            width,
            link,
            panels,
            antimicrobial,
            exact,
        } => {
            let (height_whole, height_fraction) = split_dimension("height", *height)?;
            let (width_whole, width_fraction) = split_dimension("width", *width)?;
            QuoteRequest::Panel(PanelQuote {
                family: family.clone(),
                add_on: add_on(*antimicrobial),
                kind: if *link { PanelKind::Link } else { PanelKind::Panel },
                panel_count: *panels,
                is_exact: *exact,
                height_whole,
                height_fraction,
                width_whole,
                width_fraction,
            })
        }
        Command::Pads {
            product,
            width,
            length,
            antimicrobial,
        } => {
            let (width_whole, width_fraction) = split_dimension("width", *width)?;
            let (length_whole, length_fraction) = split_dimension("length", *length)?;
            QuoteRequest::Pad(PadQuote {
                product: product.clone(),
                add_on: add_on(*antimicrobial),
                width_whole,
                width_fraction,
                length_whole,
                length_fraction,
            })
        }
        Command::Sleeves {
            product,
            width,
            length,
            option,
        } => {
            let (width_whole, width_fraction) = split_dimension("width", *width)?;
            let (length_whole, length_fraction) = split_dimension("length", *length)?;
            QuoteRequest::Sleeve(SleeveQuote {
                product: product.clone(),
                option: option.clone(),
                width_whole,
                width_fraction,
                length_whole,
                length_fraction,
            })
        }
    };
    Ok(request)
}

fn split_dimension(label: &str, value: f64) -> Result<(u32, Fraction)> {
    Fraction::split_dimension(value).with_context(|| {
        format!(
            "Invalid {}: {} is not a whole number plus an eighth-inch fraction",
            label, value
        )
    })
}

fn add_on(antimicrobial: bool) -> AddOn {
    if antimicrobial {
        AddOn::Antimicrobial
    } else {
        AddOn::Standard
    }
}
