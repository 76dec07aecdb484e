//! Conversion between amounts and their Indian-English words.
//!
//! [`number_to_words`] spells a whole-rupee amount using the lakh/crore
//! grouping, and [`words_to_number`] reads such a phrase back. Both directions
//! share one word table.

mod parser;
mod tables;
mod words;

pub use parser::{MAX_FRACTION_DIGITS, ScaleMode, parse_words, words_to_amount, words_to_number};
pub use words::{WORDS_LIMIT, number_to_words, rupees_in_words};
