//! Request types for the compensation engine API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SchemeId;
use crate::numerals::ScaleMode;

/// Request body for the `/words` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsRequest {
    /// The amount in rupees; up to two fractional digits are paise.
    pub amount: Decimal,
}

/// Request body for the `/numbers` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumbersRequest {
    /// The words phrase to read back, e.g. "Twelve Lakh Thirty Four Thousand".
    pub phrase: String,
    /// How large scale words combine. Defaults to [`ScaleMode::Scoped`].
    #[serde(default)]
    pub mode: ScaleMode,
}

/// Request body for the `/salary-structure` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureRequest {
    /// The annual cost to company in lakhs of rupees.
    pub annual_ctc_in_lakhs: Decimal,
    /// The break-down scheme.
    pub scheme: SchemeId,
    /// The date whose configured allowance rates apply. When absent the
    /// standard rates are used.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

/// Request body for the `/format` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRequest {
    /// The amount in rupees.
    pub amount: Decimal,
    /// Overrides the configured currency symbol.
    #[serde(default)]
    pub symbol: Option<String>,
}
