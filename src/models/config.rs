//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Connection settings shared by every repository instance.
pub struct ApiConfig {
    /// Base URL of the REST API, e.g. `https://api.example.com`.
    pub api_url: String,
    /// Base URL static assets are served from. Defaults to `{api_url}/static`.
    #[serde(default)]
    pub static_url: Option<String>,
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            static_url: None,
        }
    }

    /// Loads the configuration from `ADMIN_`-prefixed environment variables,
    /// reading a `.env` file first when one is present.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .add_source(config::Environment::with_prefix("ADMIN"))
            .build()?
            .try_deserialize()
    }

    /// Composes the absolute URL of a stored relative image path.
    pub fn image_url(&self, stored_path: &str) -> String {
        let base = match &self.static_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}/static", self.api_url.trim_end_matches('/')),
        };
        format!("{base}/{}", stored_path.trim_start_matches('/'))
    }
}
