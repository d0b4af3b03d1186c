/*
 * Responsibility
 * - load configuration from the environment (PORT, APP_ENV, CORS, revocation store)
 * - validate settings (missing required values fail startup)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    /// Valkey/Redis URL backing the token revocation list.
    /// Optional in development (an empty in-memory list is used instead);
    /// required in production.
    pub revocation_store_url: Option<String>,
    pub revocation_key_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let revocation_store_url = std::env::var("REVOCATION_STORE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        if revocation_store_url.is_none() && app_env.is_production() {
            return Err(ConfigError::Missing("REVOCATION_STORE_URL"));
        }

        let revocation_key_prefix = std::env::var("REVOCATION_KEY_PREFIX")
            .unwrap_or_else(|_| "auth:revoked".to_string());

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            revocation_store_url,
            revocation_key_prefix,
        })
    }
}
