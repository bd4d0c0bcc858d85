pub mod analytics;
pub mod config;
pub mod error;
pub mod input;
pub mod telemetry;
