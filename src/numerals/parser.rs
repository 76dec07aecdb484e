//! Words to amount parsing.
//!
//! A phrase is split into an integer clause and an optional fraction clause
//! at the word "point". The integer clause is folded token by token: number
//! words add to the open clause, "hundred" multiplies it in place, and a
//! large scale word closes it into a group. The fraction clause is a run of
//! single-digit words, optionally followed by one scale word that multiplies
//! the whole value ("Five Point Two Five Lakh").

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Amount;

use super::tables::{HUNDRED, POINT, Token, lookup};

/// Most fractional digit words accepted after "point".
pub const MAX_FRACTION_DIGITS: u32 = 18;

/// How a large scale word (thousand and up) combines with what precedes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// The scale multiplies the open clause plus any preceding groups closed
    /// by an equal or smaller scale. "Five Crore Twelve Lakh" is 5,12,00,000
    /// and every `number_to_words` output parses back to its number.
    #[default]
    Scoped,
    /// The scale multiplies everything accumulated so far. Reproduces the
    /// letter generator's historical reading, which only agrees with
    /// `Scoped` for phrases containing at most one large scale word.
    LastScaleWins,
}

/// Parses an amount phrase using [`ScaleMode::Scoped`].
///
/// # Examples
///
/// ```
/// use compensation_engine::numerals::words_to_number;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     words_to_number("Five Point Two Five").unwrap(),
///     Decimal::from_str("5.25").unwrap()
/// );
/// assert_eq!(
///     words_to_number("Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven").unwrap(),
///     Decimal::from(1_234_567)
/// );
/// ```
pub fn words_to_number(phrase: &str) -> EngineResult<Decimal> {
    parse_words(phrase, ScaleMode::Scoped)
}

/// Parses an amount phrase into an [`Amount`].
///
/// Fails with `InvalidAmount` when the phrase has more than two fractional
/// digits.
pub fn words_to_amount(phrase: &str) -> EngineResult<Amount> {
    Amount::from_rupees(words_to_number(phrase)?)
}

/// Parses an amount phrase with the given scale mode.
///
/// Words are matched case-insensitively and may be separated by whitespace,
/// hyphens or commas. "and" is ignored.
///
/// # Errors
///
/// - `ParseError` for an empty phrase, an unrecognised word, a scale word
///   with no quantity before it, or a malformed fraction clause
/// - `RangeError` when the value does not fit
pub fn parse_words(phrase: &str, mode: ScaleMode) -> EngineResult<Decimal> {
    let tokens = tokenize(phrase)?;

    let (integer_tokens, fraction_tokens) =
        match tokens.iter().position(|(_, token)| *token == Token::Point) {
            Some(index) => (&tokens[..index], Some(&tokens[index + 1..])),
            None => (&tokens[..], None),
        };

    let clause = integer_tokens
        .iter()
        .try_fold(Clause::new(mode), |clause, &(word, token)| {
            clause.push(word, token, phrase)
        })?;

    if fraction_tokens.is_none() && !clause.seen_number {
        return Err(EngineError::parse(phrase, "phrase contains no number words"));
    }

    let integer = clause.finish(phrase)?;
    match fraction_tokens {
        Some(tokens) => apply_fraction(integer, tokens, phrase),
        None => Ok(Decimal::from(integer)),
    }
}

fn tokenize(phrase: &str) -> EngineResult<Vec<(&str, Token)>> {
    let tokens = phrase
        .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .filter(|word| !word.is_empty())
        .map(|word| {
            lookup(word)
                .map(|token| (word, token))
                .ok_or_else(|| EngineError::parse(word, "unrecognised word"))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    if tokens.is_empty() {
        return Err(EngineError::parse("", "phrase is empty"));
    }
    Ok(tokens)
}

/// Fold state for the integer clause: closed groups plus the open clause.
#[derive(Debug)]
struct Clause {
    mode: ScaleMode,
    /// Closed groups as `(closing scale, value)`, most significant first.
    groups: Vec<(u64, u64)>,
    current: u64,
    has_quantity: bool,
    seen_number: bool,
}

impl Clause {
    fn new(mode: ScaleMode) -> Self {
        Self {
            mode,
            groups: Vec::new(),
            current: 0,
            has_quantity: false,
            seen_number: false,
        }
    }

    fn push(mut self, word: &str, token: Token, phrase: &str) -> EngineResult<Self> {
        match token {
            Token::Number(value) => {
                self.current = self
                    .current
                    .checked_add(value)
                    .ok_or_else(|| overflow(phrase))?;
                self.has_quantity = true;
                self.seen_number = true;
            }
            Token::Hundred => {
                if !self.has_quantity {
                    return Err(EngineError::parse(word, "scale word has no quantity before it"));
                }
                self.current = self
                    .current
                    .checked_mul(HUNDRED)
                    .ok_or_else(|| overflow(phrase))?;
            }
            Token::Scale(scale) => self.close(word, scale, phrase)?,
            Token::Filler => {}
            Token::Point => {
                return Err(EngineError::parse(word, "unexpected decimal separator"));
            }
        }
        Ok(self)
    }

    fn close(&mut self, word: &str, scale: u64, phrase: &str) -> EngineResult<()> {
        let keep = match self.mode {
            ScaleMode::Scoped => self
                .groups
                .iter()
                .rposition(|&(closing, _)| closing > scale)
                .map_or(0, |index| index + 1),
            ScaleMode::LastScaleWins => 0,
        };

        if !self.has_quantity && keep == self.groups.len() {
            return Err(EngineError::parse(word, "scale word has no quantity before it"));
        }

        let inner = self
            .groups
            .drain(keep..)
            .try_fold(self.current, |sum, (_, value)| sum.checked_add(value))
            .ok_or_else(|| overflow(phrase))?;
        let value = inner.checked_mul(scale).ok_or_else(|| overflow(phrase))?;

        self.groups.push((scale, value));
        self.current = 0;
        self.has_quantity = false;
        Ok(())
    }

    fn finish(self, phrase: &str) -> EngineResult<u64> {
        self.groups
            .iter()
            .try_fold(self.current, |sum, &(_, value)| sum.checked_add(value))
            .ok_or_else(|| overflow(phrase))
    }
}

fn apply_fraction(integer: u64, tokens: &[(&str, Token)], phrase: &str) -> EngineResult<Decimal> {
    let mut digits: u64 = 0;
    let mut count: u32 = 0;
    let mut trailing_scale: Option<u64> = None;

    for &(word, token) in tokens {
        if trailing_scale.is_some() {
            return Err(EngineError::parse(
                word,
                "no words may follow the trailing scale word",
            ));
        }
        match token {
            Token::Number(digit) if digit <= 9 => {
                if count == MAX_FRACTION_DIGITS {
                    return Err(EngineError::parse(word, "too many fractional digits"));
                }
                digits = digits * 10 + digit;
                count += 1;
            }
            Token::Hundred => trailing_scale = Some(HUNDRED),
            Token::Scale(scale) => trailing_scale = Some(scale),
            Token::Point => {
                return Err(EngineError::parse(word, "phrase has more than one 'point'"));
            }
            _ => {
                return Err(EngineError::parse(
                    word,
                    "expected a single digit word after 'point'",
                ));
            }
        }
    }

    if count == 0 {
        return Err(EngineError::parse(POINT, "no digit words follow 'point'"));
    }

    // Exact scaled-integer value; anything Decimal cannot hold is out of range.
    let mantissa = i128::from(integer)
        .checked_mul(10_i128.pow(count))
        .and_then(|shifted| shifted.checked_add(i128::from(digits)))
        .and_then(|value| value.checked_mul(i128::from(trailing_scale.unwrap_or(1))))
        .ok_or_else(|| overflow(phrase))?;
    Decimal::try_from_i128_with_scale(mantissa, count).map_err(|_| overflow(phrase))
}

fn overflow(phrase: &str) -> EngineError {
    EngineError::RangeError {
        value: phrase.to_string(),
        limit: u64::MAX.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scoped(phrase: &str) -> Decimal {
        parse_words(phrase, ScaleMode::Scoped).unwrap()
    }

    fn last_scale(phrase: &str) -> Decimal {
        parse_words(phrase, ScaleMode::LastScaleWins).unwrap()
    }

    #[test]
    fn test_simple_numbers() {
        assert_eq!(scoped("Zero"), dec("0"));
        assert_eq!(scoped("seven"), dec("7"));
        assert_eq!(scoped("Forty Two"), dec("42"));
        assert_eq!(scoped("forty-two"), dec("42"));
    }

    #[test]
    fn test_hundred_nests_inside_clause() {
        assert_eq!(scoped("One Hundred"), dec("100"));
        assert_eq!(scoped("Five Hundred and Sixty Seven"), dec("567"));
        assert_eq!(scoped("Twenty One Hundred"), dec("2100"));
    }

    #[test]
    fn test_lakh_thousand_phrase() {
        assert_eq!(
            scoped("Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven"),
            dec("1234567")
        );
    }

    #[test]
    fn test_million_and_billion_are_accepted() {
        assert_eq!(scoped("Two Million"), dec("2000000"));
        assert_eq!(scoped("One Billion Five Million"), dec("1005000000"));
    }

    #[test]
    fn test_scoped_applies_crore_to_nested_lakh_clause() {
        assert_eq!(
            scoped("Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven Crore"),
            dec("12345670000000")
        );
        assert_eq!(scoped("One Crore Crore"), dec("100000000000000"));
        assert_eq!(scoped("Five Crore Twelve Lakh"), dec("51200000"));
    }

    #[test]
    fn test_last_scale_wins_multiplies_running_total() {
        // Thousand then Lakh: (12 x 1000 + 5) x 100000
        assert_eq!(
            last_scale("Twelve Thousand Five Lakh"),
            dec("1200500000")
        );
        assert_eq!(
            last_scale("Twelve Lakh Thirty Four Thousand"),
            dec("1200034000")
        );
        assert_eq!(
            scoped("Twelve Lakh Thirty Four Thousand"),
            dec("1234000")
        );
    }

    #[test]
    fn test_modes_agree_with_single_scale_word() {
        for phrase in ["Five Lakh", "One Thousand Five", "Two Hundred Thousand", "Ninety"] {
            assert_eq!(scoped(phrase), last_scale(phrase), "phrase: {}", phrase);
        }
    }

    #[test]
    fn test_fraction_digits_are_concatenated() {
        assert_eq!(scoped("Five Point Two Five"), dec("5.25"));
        assert_eq!(scoped("Zero Point Zero Five"), dec("0.05"));
        assert_eq!(scoped("Point Five"), dec("0.5"));
        assert_eq!(scoped("One Point One Two Three"), dec("1.123"));
    }

    #[test]
    fn test_trailing_scale_multiplies_whole_value() {
        assert_eq!(scoped("Five Point Two Five Lakh"), dec("525000"));
        assert_eq!(last_scale("Eight Point Five Lakh"), dec("850000"));
        assert_eq!(scoped("One Point Five Crore"), dec("15000000"));
    }

    #[test]
    fn test_empty_phrase_is_parse_error() {
        for phrase in ["", "   ", " - , "] {
            match parse_words(phrase, ScaleMode::Scoped) {
                Err(EngineError::ParseError { token, message }) => {
                    assert_eq!(token, "");
                    assert!(message.contains("empty"));
                }
                other => panic!("Expected ParseError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unrecognised_word_is_named() {
        match words_to_number("Five Lakhs") {
            Err(EngineError::ParseError { token, .. }) => assert_eq!(token, "Lakhs"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_fractions() {
        assert!(matches!(
            words_to_number("Five Point"),
            Err(EngineError::ParseError { .. })
        ));
        assert!(matches!(
            words_to_number("Five Point Twenty"),
            Err(EngineError::ParseError { .. })
        ));
        assert!(matches!(
            words_to_number("Five Point Two Point Three"),
            Err(EngineError::ParseError { .. })
        ));
        match words_to_number("Five Point Two Lakh Three") {
            Err(EngineError::ParseError { token, .. }) => assert_eq!(token, "Three"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_scale_without_quantity_is_parse_error() {
        match words_to_number("Lakh") {
            Err(EngineError::ParseError { token, .. }) => assert_eq!(token, "Lakh"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
        assert!(words_to_number("Hundred").is_err());
        assert!(words_to_number("and").is_err());
    }

    #[test]
    fn test_long_fraction_keeps_every_digit() {
        let integer = crate::numerals::number_to_words(999_999_999_999_999).unwrap();
        let phrase = format!("{} Point{}", integer, " Nine".repeat(13));
        assert_eq!(scoped(&phrase), dec("999999999999999.9999999999999"));
    }

    #[test]
    fn test_fraction_beyond_decimal_precision_is_range_error() {
        let integer = crate::numerals::number_to_words(999_999_999_999_999).unwrap();
        let phrase = format!("{} Point{}", integer, " Nine".repeat(18));
        match words_to_number(&phrase) {
            Err(EngineError::RangeError { value, .. }) => assert_eq!(value, phrase),
            other => panic!("Expected RangeError, got {:?}", other),
        }
    }

    #[test]
    fn test_overflow_is_range_error() {
        let result = words_to_number("Ninety Nine Billion Billion Billion");
        assert!(matches!(result, Err(EngineError::RangeError { .. })));
    }

    #[test]
    fn test_words_to_amount_limits_precision() {
        assert_eq!(words_to_amount("Five Point Two Five").unwrap().paise(), 525);
        assert!(matches!(
            words_to_amount("One Point One Two Three"),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_scale_mode_serde() {
        let mode: ScaleMode = serde_json::from_str("\"last_scale_wins\"").unwrap();
        assert_eq!(mode, ScaleMode::LastScaleWins);
        assert_eq!(ScaleMode::default(), ScaleMode::Scoped);
    }
}
