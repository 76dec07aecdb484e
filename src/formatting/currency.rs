//! Indian digit grouping for currency display.
//!
//! The last three digits form one group and every group to their left has
//! two digits: `12,34,567` rather than `1,234,567`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::Amount;

/// The default currency symbol.
pub const RUPEE_SYMBOL: &str = "₹";

/// Renders amounts with Indian digit grouping and a currency prefix.
///
/// # Example
///
/// ```
/// use compensation_engine::formatting::CurrencyFormatter;
/// use compensation_engine::models::Amount;
///
/// let formatter = CurrencyFormatter::default();
/// assert_eq!(formatter.format(Amount::from_paise(123_456_700)), "₹12,34,567");
///
/// let plain = CurrencyFormatter::with_symbol("Rs. ");
/// assert_eq!(plain.format(Amount::from_paise(150_005)), "Rs. 1,500.05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl CurrencyFormatter {
    /// Creates a formatter with a custom prefix.
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Returns the prefix this formatter writes.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Formats an amount. Paise are shown only when non-zero.
    pub fn format(&self, amount: Amount) -> String {
        let rupees = group_indian_digits(amount.whole_rupees());
        match amount.paise_part() {
            0 => format!("{}{}", self.symbol, rupees),
            paise => format!("{}{}.{:02}", self.symbol, rupees, paise),
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::with_symbol(RUPEE_SYMBOL)
    }
}

/// Formats a decimal rupee value with the rupee symbol.
///
/// # Errors
///
/// Returns `InvalidAmount` for negative values or values with more than two
/// fractional digits.
///
/// # Example
///
/// ```
/// use compensation_engine::formatting::format_indian_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_indian_currency(Decimal::from(1_234_567)).unwrap(), "₹12,34,567");
/// ```
pub fn format_indian_currency(amount: Decimal) -> EngineResult<String> {
    let amount = Amount::from_rupees(amount)?;
    Ok(CurrencyFormatter::default().format(amount))
}

/// Groups the digits of a whole number the Indian way, without a symbol.
pub fn group_indian_digits(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
