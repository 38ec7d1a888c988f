pub mod config;
pub mod error;
pub mod quiz;
pub mod simulation;
pub mod telemetry;
