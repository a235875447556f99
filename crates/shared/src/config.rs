//! Application configuration management.

use serde::Deserialize;

use crate::session::{AdminSession, UserInfo};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Admin API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Auth context supplied by the identity provider.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Admin API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL that request paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Bearer token attached to requests, if any.
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            access_token: None,
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Prefix placed in front of currency amounts.
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
    /// Time range shown on the sales chart (`week`, `month` or `year`).
    #[serde(default = "default_time_range")]
    pub time_range: String,
}

fn default_currency_prefix() -> String {
    "$".to_string()
}

fn default_time_range() -> String {
    "month".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_prefix: default_currency_prefix(),
            time_range: default_time_range(),
        }
    }
}

/// Auth context as handed over by the identity provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Whether the signed-in user is an admin.
    #[serde(default)]
    pub is_admin: bool,
    /// User ID.
    pub user_id: Option<u64>,
    /// User email.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
}

impl SessionConfig {
    /// Builds the immutable session value injected into the dashboard.
    #[must_use]
    pub fn to_session(&self) -> AdminSession {
        let user = self.user_id.map(|id| UserInfo {
            id,
            email: self.email.clone().unwrap_or_default(),
            name: self.name.clone(),
        });
        AdminSession::new(self.is_admin, user)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SHOPDASH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
