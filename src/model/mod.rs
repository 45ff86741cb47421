//! Data model: quote inputs, fractional components and the result record.

mod fraction;
mod quote;
mod result;

pub use fraction::Fraction;
pub use quote::{AddOn, PadQuote, PanelKind, PanelQuote, PleatQuote, SleeveQuote};
pub use result::QuoteResult;
