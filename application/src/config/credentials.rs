//! Provider credential shape checks.
//!
//! Credentials are read from the process environment by the
//! infrastructure layer and checked here for plausibility only —
//! non-empty, above a minimum length, not a literal placeholder. They
//! are never validated against the provider; a well-shaped but revoked
//! key still fails at call time.

use serde::{Deserialize, Serialize};

/// Keys shorter than this cannot be real provider credentials.
const MIN_KEY_LENGTH: usize = 10;

/// Tokens that mark a value as an unfilled template rather than a key.
const PLACEHOLDER_TOKENS: [&str; 6] = [
    "your-api-key",
    "your_api_key",
    "changeme",
    "placeholder",
    "xxxxx",
    "api-key-here",
];

/// Credentials for the two generative-text providers.
///
/// The primary provider takes a single key; the secondary provider
/// takes a key/endpoint pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderCredentials {
    /// Primary provider API key (`GEMINI_API_KEY`).
    pub gemini_api_key: String,
    /// Secondary provider API key (`AZURE_OPENAI_API_KEY`).
    pub azure_api_key: String,
    /// Secondary provider endpoint (`AZURE_OPENAI_ENDPOINT`).
    pub azure_endpoint: String,
}

impl ProviderCredentials {
    /// Whether the primary credential looks like a real key.
    ///
    /// An implausible primary credential is fatal: the pipeline refuses
    /// to run at all rather than burn an intelligence lookup on a
    /// request that cannot finish.
    pub fn primary_plausible(&self) -> bool {
        plausible_key(&self.gemini_api_key)
    }

    /// Whether the secondary credential pair looks usable.
    ///
    /// An implausible secondary pair is non-fatal: the industry
    /// analysis step is skipped and the pipeline continues.
    pub fn secondary_plausible(&self) -> bool {
        plausible_key(&self.azure_api_key) && !self.azure_endpoint.trim().is_empty()
    }
}

fn plausible_key(value: &str) -> bool {
    let value = value.trim();
    if value.len() < MIN_KEY_LENGTH {
        return false;
    }
    let lowered = value.to_lowercase();
    !PLACEHOLDER_TOKENS
        .iter()
        .any(|token| lowered.contains(token))
}
