//! Configuration loading for finops-advisor
//!
//! File I/O and merging of configuration from multiple sources:
//! built-in defaults, a global config file, a project-level
//! `advisor.toml`, and `ADVISOR_*` environment overrides. Provider
//! credentials come from the process environment only.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, IntelligenceConfig, LoggingConfig, ProvidersConfig};
pub use loader::ConfigLoader;
