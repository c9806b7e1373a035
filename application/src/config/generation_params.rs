//! Sampling configuration for provider calls.

use serde::{Deserialize, Serialize};

/// Sampling parameters for one completion call.
///
/// The defaults match the pipeline's fixed configuration: bounded
/// output and moderate randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: 2048,
            temperature: 0.7,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
