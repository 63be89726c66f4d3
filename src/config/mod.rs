//! Configuration loading and management for the Wage Progression Engine.
//!
//! This module provides functionality to load the agreement configuration
//! from YAML files, including the agreement metadata and the pay-grade tier
//! table the user selects the base wage from.
//!
//! # Example
//!
//! ```no_run
//! use tarif_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dataport2023").unwrap();
//! println!("Loaded agreement: {}", config.agreement().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AgreementConfig, AgreementMetadata, PayGrade, TierConfig};
