//! The shared word table used in both directions.
//!
//! The converter indexes the name arrays by digit, and the parser resolves
//! a lowercase token back to a [`Token`] through [`lookup`].

/// Names of 0..=9.
pub(crate) const SINGLE: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Names of 10..=19, indexed by `n - 10`.
pub(crate) const DOUBLE: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

/// Names of the tens, indexed by `n / 10`. Slots 0 and 1 are unused.
pub(crate) const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

pub(crate) const HUNDRED: u64 = 100;
pub(crate) const THOUSAND: u64 = 1_000;
pub(crate) const LAKH: u64 = 100_000;
pub(crate) const MILLION: u64 = 1_000_000;
pub(crate) const CRORE: u64 = 10_000_000;
pub(crate) const BILLION: u64 = 1_000_000_000;

/// Scale words in ascending order. Million and billion are only read.
pub(crate) const SCALES: [(&str, u64); 6] = [
    ("Hundred", HUNDRED),
    ("Thousand", THOUSAND),
    ("Lakh", LAKH),
    ("Million", MILLION),
    ("Crore", CRORE),
    ("Billion", BILLION),
];

/// Joins the integer and fraction clauses of a phrase.
pub(crate) const POINT: &str = "point";

/// Connective emitted between hundreds and the remainder.
pub(crate) const AND: &str = "and";

/// A classified word of an amount phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// A unit, teen or tens word with its value (0..=90).
    Number(u64),
    /// "hundred", which nests inside the current clause.
    Hundred,
    /// A scale word of a thousand or more, which closes the current clause.
    Scale(u64),
    /// The decimal separator "point".
    Point,
    /// A word that carries no value ("and").
    Filler,
}

/// Classifies a single word, ignoring ASCII case.
pub(crate) fn lookup(word: &str) -> Option<Token> {
    if word.eq_ignore_ascii_case(POINT) {
        return Some(Token::Point);
    }
    if word.eq_ignore_ascii_case(AND) {
        return Some(Token::Filler);
    }

    let numbers = SINGLE
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i as u64))
        .chain(DOUBLE.iter().enumerate().map(|(i, name)| (*name, i as u64 + 10)))
        .chain(
            TENS.iter()
                .enumerate()
                .skip(2)
                .map(|(i, name)| (*name, i as u64 * 10)),
        );
    for (name, value) in numbers {
        if word.eq_ignore_ascii_case(name) {
            return Some(Token::Number(value));
        }
    }

    SCALES
        .iter()
        .find(|(name, _)| word.eq_ignore_ascii_case(name))
        .map(|&(_, scale)| {
            if scale == HUNDRED {
                Token::Hundred
            } else {
                Token::Scale(scale)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_units_teens_and_tens() {
        assert_eq!(lookup("zero"), Some(Token::Number(0)));
        assert_eq!(lookup("Seven"), Some(Token::Number(7)));
        assert_eq!(lookup("ELEVEN"), Some(Token::Number(11)));
        assert_eq!(lookup("nineteen"), Some(Token::Number(19)));
        assert_eq!(lookup("forty"), Some(Token::Number(40)));
        assert_eq!(lookup("Ninety"), Some(Token::Number(90)));
    }

    #[test]
    fn test_lookup_scales() {
        assert_eq!(lookup("hundred"), Some(Token::Hundred));
        assert_eq!(lookup("Thousand"), Some(Token::Scale(THOUSAND)));
        assert_eq!(lookup("lakh"), Some(Token::Scale(LAKH)));
        assert_eq!(lookup("crore"), Some(Token::Scale(CRORE)));
        assert_eq!(lookup("million"), Some(Token::Scale(MILLION)));
        assert_eq!(lookup("billion"), Some(Token::Scale(BILLION)));
    }

    #[test]
    fn test_lookup_separators() {
        assert_eq!(lookup("Point"), Some(Token::Point));
        assert_eq!(lookup("and"), Some(Token::Filler));
    }

    #[test]
    fn test_empty_tens_slots_are_not_words() {
        assert_eq!(lookup(TENS[0]), None);
        assert_eq!(lookup(TENS[1]), None);
        for (index, name) in TENS.iter().enumerate().skip(2) {
            assert_eq!(lookup(name), Some(Token::Number(index as u64 * 10)));
        }
    }

    #[test]
    fn test_misspellings_and_plurals_are_not_words() {
        assert_eq!(lookup("fourty"), None);
        assert_eq!(lookup("lakhs"), None);
    }
}
