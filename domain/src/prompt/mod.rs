//! Prompt templates.

pub mod recommendation;

pub use recommendation::RecommendationPromptTemplate;
