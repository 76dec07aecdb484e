//! Configuration types for the compensation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::formatting::{CurrencyFormatter, RUPEE_SYMBOL};
use crate::models::AllowanceRateTable;

/// Metadata about the engine deployment, from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the deployment.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
    /// The currency symbol used in formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    RUPEE_SYMBOL.to_string()
}

/// An allowance rate table effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The effective date for these rates.
    pub effective_date: NaiveDate,
    /// Monthly fixed allowances for the HRA scheme.
    pub allowances: AllowanceRateTable,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine metadata.
    metadata: EngineMetadata,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, rates: Vec<RateConfig>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns all rate configurations, oldest first.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }

    /// Returns the rate configuration effective on `date`, if any.
    pub fn rate_on(&self, date: NaiveDate) -> Option<&RateConfig> {
        self.rates.iter().rfind(|r| r.effective_date <= date)
    }

    /// Returns a currency formatter using the configured symbol.
    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::with_symbol(self.metadata.currency_symbol.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn metadata() -> EngineMetadata {
        EngineMetadata {
            name: "Test".to_string(),
            version: "1".to_string(),
            currency_symbol: "Rs. ".to_string(),
        }
    }

    fn rate(date: NaiveDate, education: u64) -> RateConfig {
        RateConfig {
            effective_date: date,
            allowances: AllowanceRateTable {
                education: Amount::from_whole_rupees(education).unwrap(),
                ..AllowanceRateTable::standard()
            },
        }
    }

    #[test]
    fn test_rates_are_sorted_oldest_first() {
        let later = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let earlier = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let config = EngineConfig::new(metadata(), vec![rate(later, 300), rate(earlier, 200)]);

        assert_eq!(config.rates()[0].effective_date, earlier);
        assert_eq!(config.rates()[1].effective_date, later);
    }

    #[test]
    fn test_rate_on_picks_most_recent_effective() {
        let config = EngineConfig::new(
            metadata(),
            vec![
                rate(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), 200),
                rate(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(), 300),
            ],
        );

        let mid = config
            .rate_on(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .unwrap();
        assert_eq!(mid.allowances.education.whole_rupees(), 200);

        let on_boundary = config
            .rate_on(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
            .unwrap();
        assert_eq!(on_boundary.allowances.education.whole_rupees(), 300);

        assert!(
            config
                .rate_on(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_metadata_symbol_defaults_to_rupee() {
        let metadata: EngineMetadata =
            serde_yaml::from_str("name: Test\nversion: \"1\"\n").unwrap();
        assert_eq!(metadata.currency_symbol, "₹");
    }

    #[test]
    fn test_formatter_uses_configured_symbol() {
        let config = EngineConfig::new(metadata(), vec![]);
        assert_eq!(
            config.formatter().format(Amount::from_paise(100_000)),
            "Rs. 1,000"
        );
    }
}
