//! Server configuration, read from the environment after `.env` is loaded.

use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173";

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `allow_dev_secret`: fall back to a random JWT secret when
    /// `JWT_SECRET` is unset (debug builds only).
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        allow_dev_secret: bool,
    ) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let ttl_hours = parse_or(&lookup, "JWT_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?;
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&ttl_hours) {
            bail!("JWT_TTL_HOURS must be between 1 and {MAX_TOKEN_TTL_HOURS} (got {ttl_hours})");
        }
        let ttl_secs = ttl_hours
            .checked_mul(3600)
            .context("JWT_TTL_HOURS is out of range")?;

        let auth = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => AuthConfig::from_secret(secret),
            None if allow_dev_secret => {
                tracing::warn!("JWT_SECRET not set, using a random development secret");
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };
        let auth = auth.with_token_ttl(Duration::from_secs(ttl_secs));
        let auth = match lookup("PASSWORD_PEPPER").filter(|s| !s.is_empty()) {
            Some(pepper) => auth.with_pepper(pepper),
            None => auth,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url,
            max_connections,
            port,
            frontend_origins,
            auth,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is not a valid value: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")]), true).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.frontend_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(24 * 3600));
        assert!(config.auth.password_pepper.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://db"),
                ("PORT", "8080"),
                ("JWT_SECRET", "s3cret"),
                ("JWT_TTL_HOURS", "2"),
                ("FRONTEND_ORIGINS", "https://a.example, https://b.example"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.auth.jwt_secret, b"s3cret".to_vec());
        assert_eq!(config.auth.token_ttl, Duration::from_secs(2 * 3600));
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_missing_secret_fails_outside_development() {
        let result = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")]), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_ttl_out_of_range_fails() {
        for hours in ["0", "8761", "18446744073709551615"] {
            let result = ServerConfig::from_lookup(
                lookup(&[("DATABASE_URL", "postgres://db"), ("JWT_TTL_HOURS", hours)]),
                true,
            );
            let err = result.unwrap_err();
            assert!(err.to_string().contains("JWT_TTL_HOURS"), "{hours}: {err}");
        }

        let config = ServerConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://db"), ("JWT_TTL_HOURS", "8760")]),
            true,
        )
        .unwrap();
        assert_eq!(config.auth.token_ttl, Duration::from_secs(8760 * 3600));
    }

    #[test]
    fn test_missing_database_url_fails() {
        assert!(ServerConfig::from_lookup(lookup(&[]), true).is_err());
    }

    #[test]
    fn test_bad_port_fails() {
        let result = ServerConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://db"), ("PORT", "eighty")]),
            true,
        );
        assert!(result.is_err());
    }
}
