//! Infrastructure layer for finops-advisor
//!
//! This crate contains adapters that implement the ports defined in
//! the application layer: the two provider clients, the intelligence
//! gatherer, the exchange logger, and configuration loading.

pub mod config;
pub mod intelligence;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use intelligence::HttpIntelligenceGatherer;
pub use logging::JsonlExchangeLogger;
pub use providers::{AzureOpenAiModel, GeminiModel};
