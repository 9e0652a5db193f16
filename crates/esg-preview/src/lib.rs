pub mod config;
pub mod error;
pub mod preview;
pub mod suppliers;
pub mod telemetry;
