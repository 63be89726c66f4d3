//! Wage Progression Engine for the Dataport collective agreement 2023
//!
//! This crate models the multi-stage wage adjustment schedule agreed in the
//! Dataport Tarifabschluss and computes the resulting gross wage progression
//! across the December 2023 - February 2025 observation window, including the
//! temporary inflation compensation overlay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
