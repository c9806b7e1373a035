//! Application layer for finops-advisor
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GenerationParams, ProviderCredentials};
pub use ports::{
    completion_model::{CompletionModel, CompletionRequest, ProviderError},
    exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    intelligence::{IntelligenceError, IntelligenceGatherer},
};
pub use use_cases::analyze_industry::IndustryAnalyzer;
pub use use_cases::generate_recommendation::{
    GenerateRecommendationError, GenerateRecommendationUseCase,
};
