//! Provider adapters implementing the completion-model port.

pub mod azure_openai;
pub mod gemini;

pub use azure_openai::AzureOpenAiModel;
pub use gemini::GeminiModel;
