//! Company entities and identity matching.

pub mod context;
pub mod identity;
pub mod intelligence;

pub use context::CompanyContext;
pub use intelligence::{CompanyIntelligence, StockPerformance};
