//! The monetary amount type.
//!
//! Amounts are held as an integer number of paise so that no ratio or
//! rounding step ever touches binary floating point. Decimal rupee values
//! are only accepted and produced at the boundary.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of paise in one rupee.
pub const PAISE_PER_RUPEE: u64 = 100;

/// A non-negative monetary quantity stored in paise.
///
/// Serialises as a decimal rupee value, so `"1250.50"` in JSON or YAML
/// becomes `Amount::from_paise(125050)`.
///
/// # Example
///
/// ```
/// use compensation_engine::models::Amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Amount::from_rupees(Decimal::from_str("1250.50").unwrap()).unwrap();
/// assert_eq!(amount.paise(), 125050);
/// assert_eq!(amount.whole_rupees(), 1250);
/// assert_eq!(amount.paise_part(), 50);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from a count of paise.
    pub const fn from_paise(paise: u64) -> Self {
        Amount(paise)
    }

    /// Creates an amount from a whole number of rupees.
    ///
    /// Fails with `InvalidAmount` if the paise value would not fit in 64 bits.
    pub fn from_whole_rupees(rupees: u64) -> EngineResult<Self> {
        rupees
            .checked_mul(PAISE_PER_RUPEE)
            .map(Amount)
            .ok_or_else(|| EngineError::invalid_amount(rupees, "amount is too large"))
    }

    /// Creates an amount from a decimal rupee value.
    ///
    /// The value must be non-negative and carry at most two fractional
    /// digits once trailing zeros are dropped.
    pub fn from_rupees(value: Decimal) -> EngineResult<Self> {
        if value < Decimal::ZERO {
            return Err(EngineError::invalid_amount(value, "amount cannot be negative"));
        }
        if value.normalize().scale() > 2 {
            return Err(EngineError::invalid_amount(
                value,
                "amount can have at most two fractional digits",
            ));
        }

        value
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|paise| paise.to_u64())
            .map(Amount)
            .ok_or_else(|| EngineError::invalid_amount(value, "amount is too large"))
    }

    /// Returns the amount in paise.
    pub const fn paise(self) -> u64 {
        self.0
    }

    /// Returns the whole-rupee part of the amount.
    pub const fn whole_rupees(self) -> u64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise left over after the whole rupees (0..=99).
    pub const fn paise_part(self) -> u64 {
        self.0 % PAISE_PER_RUPEE
    }

    /// Returns the amount as a normalized decimal rupee value.
    pub fn to_rupees(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2).normalize()
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Multiplies the amount by a whole factor, returning `None` on overflow.
    pub fn checked_mul(self, factor: u64) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = EngineError;

    fn try_from(value: Decimal) -> EngineResult<Self> {
        Amount::from_rupees(value)
    }
}

/// Converts a floating point rupee value, rounding to the nearest paisa.
///
/// NaN, infinities and negative values, however small, are rejected with
/// `InvalidAmount`.
impl TryFrom<f64> for Amount {
    type Error = EngineError;

    fn try_from(value: f64) -> EngineResult<Self> {
        if !value.is_finite() {
            return Err(EngineError::invalid_amount(value, "amount must be finite"));
        }
        if value < 0.0 {
            return Err(EngineError::invalid_amount(value, "amount cannot be negative"));
        }
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| EngineError::invalid_amount(value, "amount is too large"))?;
        Amount::from_rupees(decimal.round_dp(2))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.to_rupees()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rupees())
    }
}
