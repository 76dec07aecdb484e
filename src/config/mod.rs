//! Configuration loading and management for the compensation engine.
//!
//! This module loads the engine metadata and the dated allowance rate
//! tables used by the HRA scheme from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/compensation").unwrap();
//! println!("Loaded: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, RateConfig};
