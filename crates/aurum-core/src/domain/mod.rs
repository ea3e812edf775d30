mod date;
mod quote;

pub use date::TradeDate;
pub use quote::{Quote, TROY_OUNCE_GRAMS};
