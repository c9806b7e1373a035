//! Configuration loader with multi-source merging.

use super::file_config::FileConfig;
use advisor_application::ProviderCredentials;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority.
    ///
    /// Priority (highest to lowest):
    /// 1. `ADVISOR_*` environment variables (`__` separates sections,
    ///    e.g. `ADVISOR_PROVIDERS__GEMINI_MODEL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./advisor.toml`
    /// 4. Global: `~/.config/finops-advisor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = PathBuf::from("advisor.toml");
        if project_path.exists() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("ADVISOR_").split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config).
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("finops-advisor").join("config.toml"))
    }

    /// Read provider credentials from the process environment.
    ///
    /// Values are taken as-is; plausibility is checked later by
    /// [`ProviderCredentials`], never against the provider itself.
    pub fn load_credentials() -> ProviderCredentials {
        Self::credentials_from(|key| std::env::var(key).ok())
    }

    fn credentials_from(get: impl Fn(&str) -> Option<String>) -> ProviderCredentials {
        ProviderCredentials {
            gemini_api_key: get("GEMINI_API_KEY").unwrap_or_default(),
            azure_api_key: get("AZURE_OPENAI_API_KEY").unwrap_or_default(),
            azure_endpoint: get("AZURE_OPENAI_ENDPOINT").unwrap_or_default(),
        }
    }
}
