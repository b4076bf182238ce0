//! Demo driver built on the catalog's public operations

pub mod config;
pub mod report;
pub mod scenario;

pub use config::{DemoConfig, OutputFormat};
pub use report::render;
pub use scenario::run_scenario;
