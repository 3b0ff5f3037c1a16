use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, Source};
use serde::Deserialize;

use crate::providers::{RequestStyle, StyleKind};

/// Settings for the remote model client
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Text-generation endpoint URL
    pub api_url: Option<String>,
    /// Bearer token sent with every request
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Calling convention of the endpoint
    #[serde(default)]
    pub style: StyleKind,
    /// Model path appended to `api_url` by the github style
    pub path: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            timeout: default_timeout(),
            style: StyleKind::default(),
            path: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl ModelConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MODEL_ prefix
    /// 2. cooking_agent.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MODEL_API_URL, MODEL_API_KEY, MODEL_TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None, None)
    }

    /// Same as [`ModelConfig::load`], but a non-empty `api_url` or `api_key`
    /// given here wins over every other source.
    pub fn load_with(
        api_url: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        // Optional config file (can be missing)
        layered(
            File::with_name("cooking_agent").required(false),
            api_url,
            api_key,
        )
    }

    pub fn request_style(&self) -> RequestStyle {
        RequestStyle::from_kind(self.style, self.path.as_deref())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// File source, then `MODEL_*` environment variables, then explicit overrides
fn layered<S>(
    file: S,
    api_url: Option<String>,
    api_key: Option<String>,
) -> Result<ModelConfig, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let builder = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix("MODEL").prefix_separator("_"))
        .set_override_option("api_url", non_empty(api_url))?
        .set_override_option("api_key", non_empty(api_key))?;

    from_builder(builder)
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<ModelConfig, ConfigError> {
    let mut config: ModelConfig = builder.build()?.try_deserialize()?;
    // an exported-but-empty variable counts as unset
    config.api_url = non_empty(config.api_url);
    config.api_key = non_empty(config.api_key);
    config.path = non_empty(config.path);
    Ok(config)
}
