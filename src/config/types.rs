//! Configuration types for the agreement.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the collective agreement.
///
/// Contains identifying information about the agreement: its name, the
/// version it was concluded as, and where the published terms live.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementMetadata {
    /// The human-readable name of the agreement.
    pub name: String,
    /// The version or conclusion date of the agreement.
    pub version: String,
    /// URL to the published agreement terms.
    pub source_url: String,
}

/// A pay grade (Entgeltgruppe) within the agreement.
///
/// Each grade carries the monthly gross base wages of its experience steps
/// (Stufen), ordered from step 1 upwards.
#[derive(Debug, Clone, Deserialize)]
pub struct PayGrade {
    /// Reference to the agreement annex defining this grade.
    pub clause: String,
    /// The base monthly gross wage per step, ordered from Stufe 1 upwards.
    pub steps: Vec<Decimal>,
}

/// Tier table configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    /// Map of pay grade code to its step table.
    pub grades: HashMap<String, PayGrade>,
}

/// The complete agreement configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the YAML files in an
/// agreement configuration directory.
#[derive(Debug, Clone)]
pub struct AgreementConfig {
    /// Agreement metadata.
    metadata: AgreementMetadata,
    /// Pay grades selectable under this agreement.
    grades: HashMap<String, PayGrade>,
}

impl AgreementConfig {
    /// Creates a new AgreementConfig from its component parts.
    pub fn new(metadata: AgreementMetadata, grades: HashMap<String, PayGrade>) -> Self {
        Self { metadata, grades }
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.metadata
    }

    /// Returns all pay grades.
    pub fn grades(&self) -> &HashMap<String, PayGrade> {
        &self.grades
    }
}
