//! Process configuration read from the environment (and `.env`, if present).

use std::net::IpAddr;

use tracing::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5219;
pub const DEFAULT_PORT_FALLBACK_ATTEMPTS: u16 = 20;
pub const DEFAULT_BASE_PATH: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// How many ports after `port` to try when the address is in use.
    pub port_fallback_attempts: u16,
    pub base_path: String,
    /// `None` means any origin is allowed.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            port_fallback_attempts: DEFAULT_PORT_FALLBACK_ATTEMPTS,
            base_path: DEFAULT_BASE_PATH.to_string(),
            cors_allowed_origins: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values fall
    /// back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid HOST, using {}", DEFAULT_HOST);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = parse_or_default(&lookup, "PORT", defaults.port);
        let port_fallback_attempts = parse_or_default(
            &lookup,
            "PORT_FALLBACK_ATTEMPTS",
            defaults.port_fallback_attempts,
        );

        let base_path = lookup("API_BASE_PATH")
            .map(|raw| normalize_base_path(&raw))
            .unwrap_or(defaults.base_path);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS").and_then(|raw| {
            let origins: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
            (!origins.is_empty()).then_some(origins)
        });

        Self {
            host,
            port,
            port_fallback_attempts,
            base_path,
            cors_allowed_origins,
        }
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, "Invalid {key}, using {default}");
            default
        }),
        None => default,
    }
}

/// Ensures a leading slash and no trailing slash. An empty path mounts at the root.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 5219);
        assert_eq!(config.base_path, "/api");
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("PORT_FALLBACK_ATTEMPTS", "0"),
            ("API_BASE_PATH", "catalog/"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://shop.example ,"),
        ]));
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.port_fallback_attempts, 0);
        assert_eq!(config.base_path, "/catalog");
        assert_eq!(
            config.cors_allowed_origins,
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://shop.example".to_string()
            ])
        );
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "not-an-ip"),
            ("PORT", "99999"),
            ("CORS_ALLOWED_ORIGINS", " , "),
        ]));
        assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn root_base_path_is_empty() {
        let config = Config::from_lookup(lookup_from(&[("API_BASE_PATH", "/")]));
        assert_eq!(config.base_path, "");
    }
}
