use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::fmt;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings for the veterinarian database, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub max_connections: u32,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            host: required("DB_HOST")?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            database: required("DB_NAME")?,
            port: parse_or(&lookup, "DB_PORT", DEFAULT_PORT)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new().max_connections(self.max_connections)
    }
}

/// Address the HTTP listener binds to, from `REGISTRY_BIND`.
pub fn bind_addr<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("REGISTRY_BIND").unwrap_or_else(|| DEFAULT_BIND.into())
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const BASE: &[(&str, &str)] = &[
        ("DB_HOST", "db.internal"),
        ("DB_USER", "vet"),
        ("DB_PASSWORD", "s3cret"),
        ("DB_NAME", "clinic"),
    ];

    #[test]
    fn loads_required_fields_with_defaults() {
        let cfg = DbConfig::from_lookup(env(BASE)).unwrap();

        assert_eq!(cfg.host, "db.internal");
        assert_eq!(cfg.user, "vet");
        assert_eq!(cfg.password, "s3cret");
        assert_eq!(cfg.database, "clinic");
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.max_connections, 10);
    }

    #[test]
    fn optional_fields_override_defaults() {
        let mut pairs = BASE.to_vec();
        pairs.push(("DB_PORT", "6543"));
        pairs.push(("DB_MAX_CONNECTIONS", "3"));

        let cfg = DbConfig::from_lookup(env(&pairs)).unwrap();

        assert_eq!(cfg.port, 6543);
        assert_eq!(cfg.max_connections, 3);
    }

    #[test]
    fn missing_required_variable_is_named() {
        let pairs: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "DB_PASSWORD")
            .collect();

        let err = DbConfig::from_lookup(env(&pairs)).unwrap_err();

        assert_eq!(err, ConfigError::Missing("DB_PASSWORD"));
    }

    #[test]
    fn unparsable_port_is_rejected() {
        let mut pairs = BASE.to_vec();
        pairs.push(("DB_PORT", "not-a-port"));

        let err = DbConfig::from_lookup(env(&pairs)).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "DB_PORT",
                value: "not-a-port".into()
            }
        );
    }

    #[test]
    fn debug_output_hides_password() {
        let cfg = DbConfig::from_lookup(env(BASE)).unwrap();
        let rendered = format!("{cfg:?}");

        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("db.internal"));
    }

    #[test]
    fn bind_addr_defaults_to_localhost() {
        assert_eq!(bind_addr(env(&[])), "127.0.0.1:8080");
        assert_eq!(
            bind_addr(env(&[("REGISTRY_BIND", "0.0.0.0:9000")])),
            "0.0.0.0:9000"
        );
    }
}
