use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::errors::{NewsError, NewsResult};

pub const DEFAULT_PORT: u16 = 8052;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> NewsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = parse_or(&lookup, "NEWSROOM_BIND", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&lookup, "NEWSROOM_PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            &lookup,
            "NEWSROOM_FETCH_TIMEOUT_SECS",
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?;

        Ok(Self {
            bind,
            port,
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> NewsResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| NewsError::Config(format!("{key} has an invalid value: {raw}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> NewsResult<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.addr().to_string(), "0.0.0.0:8052");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("NEWSROOM_BIND", "127.0.0.1"),
            ("NEWSROOM_PORT", "9000"),
            ("NEWSROOM_FETCH_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = config(&[("NEWSROOM_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, NewsError::Config(_)));
        assert!(err.to_string().contains("NEWSROOM_PORT"));
    }
}
