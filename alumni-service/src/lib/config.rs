use std::env;

use auth::PasswordError;
use auth::PasswordHasher;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub smtp: SmtpConfig,
    pub app: AppConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 secret for access tokens. No default: startup fails without it.
    pub access_secret: String,
    /// HS256 secret for refresh tokens. No default either.
    pub refresh_secret: String,
    #[serde(default = "default_access_ttl_minutes")]
    pub access_ttl_minutes: i64,
    #[serde(default = "default_refresh_ttl_days")]
    pub refresh_ttl_days: i64,
    #[serde(default = "default_reset_token_ttl_minutes")]
    pub reset_token_ttl_minutes: i64,
    /// Argon2 cost overrides; library defaults apply when unset.
    #[serde(default)]
    pub hash_memory_kib: Option<u32>,
    #[serde(default)]
    pub hash_iterations: Option<u32>,
    #[serde(default)]
    pub hash_parallelism: Option<u32>,
}

fn default_access_ttl_minutes() -> i64 {
    15
}

fn default_refresh_ttl_days() -> i64 {
    7
}

fn default_reset_token_ttl_minutes() -> i64 {
    60
}

impl AuthConfig {
    /// Build a hasher from the configured cost, or library defaults.
    pub fn password_hasher(&self) -> Result<PasswordHasher, PasswordError> {
        match (self.hash_memory_kib, self.hash_iterations, self.hash_parallelism) {
            (Some(memory), Some(iterations), Some(parallelism)) => {
                PasswordHasher::with_cost(memory, iterations, parallelism)
            }
            _ => Ok(PasswordHasher::new()),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Sender mailbox, e.g. `"Alumni Association <no-reply@example.com>"`.
    pub sender: String,
    /// Support address included in outbound mail bodies.
    pub contact_email: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL for links sent by email (password reset).
    pub frontend_url: String,
    /// Whether auth cookies require HTTPS; off for local development.
    #[serde(default)]
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__ACCESS_SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Refuse to start with missing or shared signing secrets. There is
    /// deliberately no compiled-in fallback.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.access_secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.access_secret must be set".to_string(),
            ));
        }
        if self.auth.refresh_secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.refresh_secret must be set".to_string(),
            ));
        }
        if self.auth.access_secret == self.auth.refresh_secret {
            return Err(ConfigError::Message(
                "auth.access_secret and auth.refresh_secret must differ".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(access_secret: &str, refresh_secret: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/test".to_string(),
            },
            server: ServerConfig { http_port: 3000 },
            auth: AuthConfig {
                access_secret: access_secret.to_string(),
                refresh_secret: refresh_secret.to_string(),
                access_ttl_minutes: 15,
                refresh_ttl_days: 7,
                reset_token_ttl_minutes: 60,
                hash_memory_kib: None,
                hash_iterations: None,
                hash_parallelism: None,
            },
            smtp: SmtpConfig {
                host: "smtp.example.com".to_string(),
                username: "mailer".to_string(),
                password: "password".to_string(),
                sender: "Alumni <no-reply@example.com>".to_string(),
                contact_email: "contact@example.com".to_string(),
            },
            app: AppConfig {
                frontend_url: "https://alumni.example.com".to_string(),
                cookie_secure: false,
            },
        }
    }

    #[test]
    fn test_validate_accepts_distinct_secrets() {
        assert!(config("access-secret", "refresh-secret").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_secret() {
        assert!(config("", "refresh-secret").validate().is_err());
        assert!(config("access-secret", "   ").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_shared_secret() {
        assert!(config("same-secret", "same-secret").validate().is_err());
    }
}
