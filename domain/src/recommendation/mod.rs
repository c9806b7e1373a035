//! Recommendation output contract, parsing, and the offline generator.

pub mod entities;
pub mod fallback;
pub mod parsing;

pub use entities::{ConditionalInsights, Recommendation, UnitMetric};
pub use fallback::fallback_recommendation;
pub use parsing::{RecommendationParseError, parse_recommendation, strip_code_fences};
