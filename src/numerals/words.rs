//! Amount to words conversion using the Indian grouping.
//!
//! Amounts are split recursively into crore, lakh, thousand and hundred
//! groups. Each group divides by its scale before recursing on the strict
//! remainder, so zero-valued groups are never spoken.

use crate::error::{EngineError, EngineResult};
use crate::models::Amount;

use super::tables::{CRORE, DOUBLE, HUNDRED, LAKH, SINGLE, TENS, THOUSAND};

/// Exclusive upper bound (in rupees) for word conversion: 10^15.
pub const WORDS_LIMIT: u64 = 1_000_000_000_000_000;

/// Converts a whole-rupee amount into its Indian-English words.
///
/// # Errors
///
/// Returns `RangeError` when `amount` is 10^15 or more.
///
/// # Examples
///
/// ```
/// use compensation_engine::numerals::number_to_words;
///
/// assert_eq!(number_to_words(0).unwrap(), "Zero");
/// assert_eq!(number_to_words(100_000).unwrap(), "One Lakh");
/// assert_eq!(
///     number_to_words(1_234_567).unwrap(),
///     "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven"
/// );
/// ```
pub fn number_to_words(amount: u64) -> EngineResult<String> {
    if amount >= WORDS_LIMIT {
        return Err(EngineError::RangeError {
            value: amount.to_string(),
            limit: WORDS_LIMIT.to_string(),
        });
    }
    Ok(spell(amount))
}

/// Renders an amount as the legal clause used in letters.
///
/// A paise part is spoken separately: `"Rupees Five and Twenty Five Paise Only"`.
///
/// # Examples
///
/// ```
/// use compensation_engine::models::Amount;
/// use compensation_engine::numerals::rupees_in_words;
///
/// let ctc = Amount::from_whole_rupees(800_000).unwrap();
/// assert_eq!(rupees_in_words(ctc).unwrap(), "Rupees Eight Lakh Only");
/// ```
pub fn rupees_in_words(amount: Amount) -> EngineResult<String> {
    let rupees = number_to_words(amount.whole_rupees())?;
    Ok(match amount.paise_part() {
        0 => format!("Rupees {} Only", rupees),
        paise => format!("Rupees {} and {} Paise Only", rupees, spell(paise)),
    })
}

fn spell(n: u64) -> String {
    match n {
        0..=9 => SINGLE[n as usize].to_string(),
        10..=19 => DOUBLE[(n - 10) as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, SINGLE[ones as usize]),
            }
        }
        100..=999 => join(
            format!("{} Hundred", SINGLE[(n / HUNDRED) as usize]),
            n % HUNDRED,
            " and ",
        ),
        1_000..=99_999 => group(n, THOUSAND, "Thousand"),
        100_000..=9_999_999 => group(n, LAKH, "Lakh"),
        _ => group(n, CRORE, "Crore"),
    }
}

fn group(n: u64, scale: u64, name: &str) -> String {
    join(format!("{} {}", spell(n / scale), name), n % scale, " ")
}

fn join(head: String, remainder: u64, separator: &str) -> String {
    if remainder == 0 {
        head
    } else {
        format!("{}{}{}", head, separator, spell(remainder))
    }
}
