//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the agreement
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AgreementConfig, AgreementMetadata, PayGrade, TierConfig};

/// Loads and provides access to the agreement configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the tier table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/dataport2023/
/// ├── agreement.yaml  # Agreement metadata
/// └── tiers.yaml      # Pay grades and their step tables
/// ```
///
/// # Example
///
/// ```no_run
/// use tarif_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dataport2023").unwrap();
///
/// // Get the base wage for Entgeltgruppe 12, Stufe 1
/// let base_fee = loader.get_base_fee("12", 1).unwrap();
/// println!("Base wage: {}", base_fee);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AgreementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/dataport2023")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tarif_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/dataport2023")?;
    /// # Ok::<(), tarif_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load agreement.yaml
        let agreement_path = path.join("agreement.yaml");
        let metadata = Self::load_yaml::<AgreementMetadata>(&agreement_path)?;

        // Load tiers.yaml
        let tiers_path = path.join("tiers.yaml");
        let tier_config = Self::load_yaml::<TierConfig>(&tiers_path)?;

        let config = AgreementConfig::new(metadata, tier_config.grades);

        Ok(Self { config })
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

    /// Returns the underlying agreement configuration.
    pub fn config(&self) -> &AgreementConfig {
        &self.config
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        self.config.agreement()
    }

    /// Gets a pay grade by its code.
    ///
    /// # Arguments
    ///
    /// * `grade` - The pay grade code (e.g., "12")
    ///
    /// # Returns
    ///
    /// Returns the pay grade if found, or `GradeNotFound` error.
    pub fn get_grade(&self, grade: &str) -> EngineResult<&PayGrade> {
        self.config
            .grades()
            .get(grade)
            .ok_or_else(|| EngineError::GradeNotFound {
                grade: grade.to_string(),
            })
    }

    /// Gets the base monthly gross wage for a pay grade and step.
    ///
    /// Steps are 1-based, matching the step numbering of the agreement
    /// (Stufe 1 through Stufe 6).
    ///
    /// # Arguments
    ///
    /// * `grade` - The pay grade code (e.g., "12")
    /// * `step` - The 1-based step within the grade
    ///
    /// # Returns
    ///
    /// Returns the base wage if found, or an error if:
    /// - The grade is not found in the configuration (`GradeNotFound`)
    /// - The step is 0 or beyond the grade's table (`StepNotFound`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tarif_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/dataport2023")?;
    /// let base_fee = loader.get_base_fee("13", 2)?;
    /// # Ok::<(), tarif_engine::error::EngineError>(())
    /// ```
    pub fn get_base_fee(&self, grade: &str, step: u32) -> EngineResult<Decimal> {
        let pay_grade = self.get_grade(grade)?;

        if step == 0 {
            return Err(EngineError::StepNotFound {
                grade: grade.to_string(),
                step,
            });
        }

        pay_grade
            .steps
            .get(step as usize - 1)
            .copied()
            .ok_or_else(|| EngineError::StepNotFound {
                grade: grade.to_string(),
                step,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/dataport2023"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.agreement().name, "Dataport Tarifabschluss 2023");
    }

    #[test]
    fn test_both_grades_present() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let grade_12 = loader.get_grade("12").unwrap();
        let grade_13 = loader.get_grade("13").unwrap();
        assert_eq!(grade_12.steps.len(), 6);
        assert_eq!(grade_13.steps.len(), 6);
    }

    #[test]
    fn test_get_base_fee_grade_12() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.get_base_fee("12", 1).unwrap(), dec("3729.19"));
        assert_eq!(loader.get_base_fee("12", 2).unwrap(), dec("4116.71"));
        assert_eq!(loader.get_base_fee("12", 6).unwrap(), dec("6020.90"));
    }

    #[test]
    fn test_get_base_fee_grade_13() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.get_base_fee("13", 1).unwrap(), dec("4137.72"));
        assert_eq!(loader.get_base_fee("13", 4).unwrap(), dec("5313.60"));
        assert_eq!(loader.get_base_fee("13", 6).unwrap(), dec("6150.68"));
    }

    #[test]
    fn test_unknown_grade_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let result = loader.get_base_fee("15", 1);
        assert!(result.is_err());

        match result {
            Err(EngineError::GradeNotFound { grade }) => {
                assert_eq!(grade, "15");
            }
            _ => panic!("Expected GradeNotFound error"),
        }
    }

    #[test]
    fn test_step_zero_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_base_fee("12", 0) {
            Err(EngineError::StepNotFound { grade, step }) => {
                assert_eq!(grade, "12");
                assert_eq!(step, 0);
            }
            _ => panic!("Expected StepNotFound error"),
        }
    }

    #[test]
    fn test_step_beyond_table_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_base_fee("12", 7) {
            Err(EngineError::StepNotFound { grade, step }) => {
                assert_eq!(grade, "12");
                assert_eq!(step, 7);
            }
            _ => panic!("Expected StepNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("agreement.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_agreement_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.agreement().name, "Dataport Tarifabschluss 2023");
        assert_eq!(loader.agreement().version, "2023-12-01");
        assert!(!loader.agreement().source_url.is_empty());
    }
}
