//! The four pricing calculators.
//!
//! Each calculator is a stateless pure function from a quote input and the
//! loaded reference tables to a result record. Invoking one twice with the
//! same inputs returns the same record; there is no caching and no partial
//! recomputation.

mod pads;
mod panels;
mod pleats;
mod rules;
mod sleeves;

pub use pads::calculate_pads;
pub use panels::calculate_panels_links;
pub use pleats::calculate_pleat_price;
pub use sleeves::calculate_sleeves;
