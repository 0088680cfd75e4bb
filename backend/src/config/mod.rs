//! Configuration management for the AurumBank backend
//!
//! Values come from environment variables (optionally seeded from a `.env` file).
//! The database URL is either given whole via `DATABASE_URL` or assembled from
//! the `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASS`/`DB_NAME` quintet.

use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment value: {0}")]
    InvalidValue(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Application environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Parse environment from string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue(format!(
                "Invalid environment: '{}'. Expected: dev, staging, or prod",
                s
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Discrete connection parameters, as the deployment `.env` ships them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbParams {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DbParams {
    pub fn to_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,

    /// Current environment
    pub environment: Environment,

    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum database connections
    pub db_max_connections: u32,

    /// CORS allowed origins (comma separated)
    pub cors_allowed_origins: Option<String>,

    /// Log level (RUST_LOG)
    pub log_level: String,

    /// Telegram user ids allowed to use the admin endpoints
    pub admin_ids: BTreeSet<i64>,

    /// Directory with the mini-app's static files, served as a fallback
    pub static_dir: Option<PathBuf>,

    /// Insert demo loan records into empty catalogs at startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .map(|s| Environment::parse(&s))
            .unwrap_or(Ok(Environment::Development))?;

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => db_params_from_env()?.to_url(),
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort("PORT must be a valid number".to_string()))?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .unwrap_or(5);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").ok();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let admin_ids = match env::var("ADMIN_IDS").or_else(|_| env::var("ADMIN_ID")) {
            Ok(raw) => parse_admin_ids(&raw)?,
            Err(_) => BTreeSet::new(),
        };

        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|s| parse_flag(&s))
            .unwrap_or(Ok(true))?;

        Ok(Config {
            database_url,
            environment,
            host,
            port,
            db_max_connections,
            cors_allowed_origins,
            log_level,
            admin_ids,
            static_dir,
            seed_demo_data,
        })
    }

    /// Get database URL with the password masked, for logging
    pub fn database_url_masked(&self) -> String {
        if let Some(at_pos) = self.database_url.rfind('@') {
            if let Some(colon_pos) = self.database_url[..at_pos].rfind(':') {
                // "postgres://" itself contains a colon; only mask user:password
                if !self.database_url[colon_pos..].starts_with("://") {
                    let prefix = &self.database_url[..colon_pos + 1];
                    let suffix = &self.database_url[at_pos..];
                    return format!("{}****{}", prefix, suffix);
                }
            }
        }
        self.database_url.clone()
    }
}

fn db_params_from_env() -> Result<DbParams, ConfigError> {
    let required = |key: &str| env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()));

    let port = required("DB_PORT")?
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort("DB_PORT must be a valid number".to_string()))?;

    Ok(DbParams {
        host: required("DB_HOST")?,
        port,
        user: required("DB_USER")?,
        password: required("DB_PASS")?,
        name: required("DB_NAME")?,
    })
}

/// Parse a comma separated list of Telegram user ids
pub fn parse_admin_ids(raw: &str) -> Result<BTreeSet<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue(format!("Invalid admin id: '{}'", s)))
        })
        .collect()
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue(format!(
            "Invalid boolean flag: '{}'",
            other
        ))),
    }
}
