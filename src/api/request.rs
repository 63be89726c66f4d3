//! Request types for the Wage Progression Engine API.
//!
//! This module defines the JSON request structure for the `/progression`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/progression` endpoint.
///
/// The user selects a pay grade and step from the tier table; an optional
/// `base_fee` overrides the tier lookup, e.g. for wages negotiated outside
/// the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionRequest {
    /// The pay grade code (e.g., "12").
    pub grade: String,
    /// The 1-based step within the pay grade (Stufe 1-6).
    pub step: u32,
    /// Optional override for the base monthly gross wage.
    #[serde(default)]
    pub base_fee: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_progression_request() {
        let json = r#"{
            "grade": "12",
            "step": 3
        }"#;

        let request: ProgressionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.grade, "12");
        assert_eq!(request.step, 3);
        assert!(request.base_fee.is_none());
    }

    #[test]
    fn test_deserialize_request_with_override() {
        let json = r#"{
            "grade": "13",
            "step": 1,
            "base_fee": "4500.00"
        }"#;

        let request: ProgressionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.base_fee,
            Some(Decimal::from_str("4500.00").unwrap())
        );
    }

    #[test]
    fn test_missing_grade_fails() {
        let json = r#"{ "step": 1 }"#;
        let result: Result<ProgressionRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_round_trip() {
        let request = ProgressionRequest {
            grade: "12".to_string(),
            step: 4,
            base_fee: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: ProgressionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.grade, request.grade);
        assert_eq!(deserialized.step, request.step);
    }
}
