//! HTTP API module for the Wage Progression Engine.
//!
//! This module provides the REST API endpoint for computing the wage
//! progression of a selected tier under the Dataport collective agreement
//! 2023.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProgressionRequest;
pub use response::ApiError;
pub use state::AppState;
