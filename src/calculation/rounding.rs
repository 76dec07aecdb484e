//! Integer rounding helpers for paise arithmetic.

use crate::models::{Amount, PAISE_PER_RUPEE};

/// Number of months a CTC is spread over.
pub const MONTHS_PER_YEAR: u64 = 12;

/// Divides and rounds half up. The denominator must be positive.
pub(crate) fn round_div(numerator: u128, denominator: u128) -> u128 {
    (numerator * 2 + denominator) / (denominator * 2)
}

/// Returns `percent`% of an annual amount spread over twelve months,
/// rounded to the nearest whole rupee.
pub(crate) fn monthly_share(annual: Amount, percent: u64) -> Amount {
    let denominator = 100 * u128::from(MONTHS_PER_YEAR) * u128::from(PAISE_PER_RUPEE);
    let rupees = round_div(
        u128::from(annual.paise()) * u128::from(percent),
        denominator,
    );
    whole_rupees(rupees)
}

/// Returns `percent`% of the whole rupees of an amount, rounded to the
/// nearest rupee.
pub(crate) fn percent_of(amount: Amount, percent: u64) -> Amount {
    whole_rupees(round_div(
        u128::from(amount.whole_rupees()) * u128::from(percent),
        100,
    ))
}

/// Rounds an amount to the nearest whole rupee.
pub(crate) fn round_to_rupee(amount: Amount) -> Amount {
    whole_rupees(round_div(
        u128::from(amount.paise()),
        u128::from(PAISE_PER_RUPEE),
    ))
}

/// Saturates at the largest whole-rupee amount a u64 of paise can hold.
fn whole_rupees(rupees: u128) -> Amount {
    let rupees = u64::try_from(rupees)
        .unwrap_or(u64::MAX)
        .min(u64::MAX / PAISE_PER_RUPEE);
    Amount::from_paise(rupees * PAISE_PER_RUPEE)
}
