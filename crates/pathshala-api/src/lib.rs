pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod normalization;
pub mod problem;
pub mod router;
pub mod state;
pub mod topic;
pub mod tracing;
pub mod unit;
pub mod v1;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
