//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::formatting::CurrencyFormatter;
use crate::models::AllowanceRateTable;

use super::types::{EngineConfig, EngineMetadata, RateConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/compensation/
/// ├── engine.yaml          # Engine metadata and currency symbol
/// └── rates/
///     └── 2025-04-01.yaml  # Allowance rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use compensation_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/compensation").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let rates = loader.get_allowance_rates(date).unwrap();
/// println!("Leave travel: {}", rates.leave_travel);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or invalid amounts (`ConfigParseError`)
    /// - The rates directory holds no rate files (`ConfigNotFound`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compensation_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/compensation")?;
    /// # Ok::<(), compensation_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let rates = Self::load_rates(&path.join("rates"))?;

        Ok(Self {
            config: EngineConfig::new(metadata, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let rate_config = Self::load_yaml::<RateConfig>(&path)?;
                debug!(
                    path = %path.display(),
                    effective_date = %rate_config.effective_date,
                    "Loaded allowance rates"
                );
                rates.push(rate_config);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Gets the allowance rate table effective on a given date.
    ///
    /// The most recent table effective on or before `date` is used.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compensation_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/compensation")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    /// let rates = loader.get_allowance_rates(date)?;
    /// # Ok::<(), compensation_engine::error::EngineError>(())
    /// ```
    pub fn get_allowance_rates(&self, date: NaiveDate) -> EngineResult<AllowanceRateTable> {
        self.config
            .rate_on(date)
            .map(|rate_config| rate_config.allowances)
            .ok_or(EngineError::RateNotFound { date })
    }

    /// Returns a currency formatter using the configured symbol.
    pub fn formatter(&self) -> CurrencyFormatter {
        self.config.formatter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn config_path() -> &'static str {
        "./config/compensation"
    }

    fn rupees(value: u64) -> Amount {
        Amount::from_whole_rupees(value).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().name, "Compensation Engine");
        assert_eq!(loader.metadata().version, "2025-04-01");
        assert_eq!(loader.metadata().currency_symbol, "₹");
        assert_eq!(loader.config().rates().len(), 2);
    }

    #[test]
    fn test_allowance_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let rates = loader.get_allowance_rates(date).unwrap();

        assert_eq!(rates, AllowanceRateTable::standard());
    }

    #[test]
    fn test_later_rate_file_takes_effect() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let rates = loader.get_allowance_rates(date).unwrap();

        assert_eq!(rates.leave_travel, rupees(1500));
        assert_eq!(rates.education, rupees(200));
    }

    #[test]
    fn test_rate_not_found_for_date_before_effective() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match loader.get_allowance_rates(date) {
            Err(EngineError::RateNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected RateNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_formatter_uses_configured_symbol() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.formatter().format(rupees(1_234_567)), "₹12,34,567");
    }
}
