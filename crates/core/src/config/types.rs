use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::query::DEFAULT_LATEST_YEAR;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8000
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    /// Access tokens and the users they act as.
    #[serde(default)]
    pub tokens: Vec<TokenGrant>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// Opaque bearer tokens mapped to users.
    Token,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Token => "token",
        }
    }
}

/// One access token. Users named here are created on startup if missing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenGrant {
    pub token: String,
    pub username: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
    /// How long a statement waits on a locked database before the request
    /// fails with 503.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("cineguru.db")
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

/// Catalog search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Upper year bound applied when a search gives none.
    #[serde(default = "default_latest_year")]
    pub latest_year: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latest_year: default_latest_year(),
        }
    }
}

fn default_latest_year() -> i32 {
    DEFAULT_LATEST_YEAR
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub auth: SanitizedAuthConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub search: SearchConfig,
}

/// Auth section without the tokens themselves.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedAuthConfig {
    pub method: String,
    pub tokens_configured: usize,
    pub usernames: Vec<String>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        let mut usernames: Vec<String> = config
            .auth
            .tokens
            .iter()
            .map(|grant| grant.username.clone())
            .collect();
        usernames.sort();
        usernames.dedup();

        Self {
            auth: SanitizedAuthConfig {
                method: config.auth.method.as_str().to_string(),
                tokens_configured: config.auth.tokens.len(),
                usernames,
            },
            server: config.server.clone(),
            database: config.database.clone(),
            search: config.search.clone(),
        }
    }
}
