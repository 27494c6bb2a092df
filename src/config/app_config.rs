use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub password_storage: PasswordStorage,
}

/// How passwords are kept in the user store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStorage {
    /// Stored as given and compared directly
    #[default]
    Plaintext,
    /// Salted Argon2 hash
    Argon2,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiConfig {
    /// Mount `DELETE /users/{user_id}`
    #[serde(default)]
    pub allow_delete: bool,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_true() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_metrics_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the environment
    ///
    /// Later sources win: `config/default`, `config/local`, `APP__*`
    /// variables, then a bare `PORT` variable for the listen port. An empty
    /// `PORT` counts as unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(app_environment(), std::env::var("PORT").ok())
    }

    fn load_from(
        environment: config::Environment,
        port: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let port = port.filter(|p| !p.trim().is_empty());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .set_override_option("server.port", port)?
            .build()?;

        config.try_deserialize()
    }
}

fn app_environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}
