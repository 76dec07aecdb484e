//! Display formatting of amounts for letter tables.

mod currency;

pub use currency::{CurrencyFormatter, RUPEE_SYMBOL, format_indian_currency, group_indian_digits};
