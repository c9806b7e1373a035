//! Logging infrastructure — structured exchange logging.
//!
//! Provides [`JsonlExchangeLogger`], a JSONL file writer implementing
//! the [`ExchangeLogger`](advisor_application::ExchangeLogger) port.

pub mod jsonl_logger;

pub use jsonl_logger::JsonlExchangeLogger;
