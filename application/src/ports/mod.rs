//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod completion_model;
pub mod exchange_logger;
pub mod intelligence;

pub use completion_model::{CompletionModel, CompletionRequest, ProviderError};
pub use exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
pub use intelligence::{IntelligenceError, IntelligenceGatherer};
