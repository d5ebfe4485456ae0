/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Content/image generation settings.
    pub generation: GenerationConfig,
}

/// Settings for the article generator.
///
/// The API key is optional at startup: the service runs fine without it,
/// and the generate endpoint reports a configuration error instead.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// OpenRouter API key (`OPENROUTER_API_KEY`). `None` disables generation.
    pub openrouter_api_key: Option<String>,
    /// Completion model (`LLM_MODEL`).
    pub model: String,
    /// Image provider name (`IMAGE_PROVIDER`): `picsum` (default) or `unsplash`.
    pub image_provider: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `OPENROUTER_API_KEY`   | unset                   |
    /// | `LLM_MODEL`            | `deepseek/deepseek-chat`|
    /// | `IMAGE_PROVIDER`       | `picsum`                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let generation = GenerationConfig {
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| newsgen_generator::openrouter::DEFAULT_MODEL.into()),
            image_provider: std::env::var("IMAGE_PROVIDER").unwrap_or_else(|_| "picsum".into()),
        };

        Self {
            host,
            port,
            request_timeout_secs,
            generation,
        }
    }
}
