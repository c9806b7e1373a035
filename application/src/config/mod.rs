//! Application-level configuration.
//!
//! Configuration types that control how the use cases behave:
//!
//! - [`ProviderCredentials`] — env-sourced credentials with
//!   shape-plausibility checks
//! - [`GenerationParams`] — sampling configuration for provider calls

pub mod credentials;
pub mod generation_params;

pub use credentials::ProviderCredentials;
pub use generation_params::GenerationParams;
