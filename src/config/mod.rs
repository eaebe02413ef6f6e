// src/config/mod.rs
// Process configuration: environment first, then built-in defaults

use once_cell::sync::Lazy;
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct CalcConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── CORS
    pub cors_origin: String,

    // ── Static assets
    pub static_max_age: u64,

    // ── Logging
    pub log_level: String,
}

/// Parse `raw` after trimming whitespace and any trailing `# comment`.
fn parse_clean<T: FromStr>(raw: &str) -> Option<T> {
    raw.split('#').next().unwrap_or("").trim().parse::<T>().ok()
}

fn var_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => match parse_clean(&val) {
            Some(parsed) => parsed,
            None => {
                eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                default
            }
        },
        None => default,
    }
}

impl CalcConfig {
    pub fn from_env() -> Self {
        // A missing .env is normal outside development
        let _ = dotenvy::dotenv();
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable keys fall back to defaults.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: var_or(&lookup, "CALC_HOST", "127.0.0.1".to_string()),
            port: var_or(&lookup, "CALC_PORT", 8000),
            cors_origin: var_or(&lookup, "CALC_CORS_ORIGIN", "*".to_string()),
            static_max_age: var_or(&lookup, "CALC_STATIC_MAX_AGE", 3600),
            log_level: var_or(&lookup, "CALC_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Max tracing level; unknown names mean `info`
    pub fn log_level(&self) -> Level {
        Level::from_str(self.log_level.trim()).unwrap_or(Level::INFO)
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<CalcConfig> = Lazy::new(CalcConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> CalcConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CalcConfig::from_source(move |key| map.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = CalcConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.static_max_age, 3600);
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_values_with_comments() {
        let config = from_pairs(&[("CALC_PORT", " 9090  # local override"), ("CALC_HOST", "0.0.0.0")]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_unparsable_falls_back() {
        let config = from_pairs(&[("CALC_PORT", "not-a-port"), ("CALC_STATIC_MAX_AGE", "-1")]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_max_age, 3600);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(from_pairs(&[("CALC_LOG_LEVEL", "debug")]).log_level(), Level::DEBUG);
        assert_eq!(from_pairs(&[("CALC_LOG_LEVEL", "TRACE")]).log_level(), Level::TRACE);
        assert_eq!(from_pairs(&[("CALC_LOG_LEVEL", "chatty")]).log_level(), Level::INFO);
    }
}
