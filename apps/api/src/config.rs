use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Startup aborts if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch
    /// the process environment.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match optional("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            gemini_api_key: optional("GEMINI_API_KEY")
                .context("Required environment variable 'GEMINI_API_KEY' is not set")?,
            gemini_model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: optional("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = load(&[("PORT", "8080")]).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        assert!(load(&[("GEMINI_API_KEY", "   ")]).is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&[("GEMINI_API_KEY", "secret")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_api_base, DEFAULT_API_BASE);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_applied() {
        let config = load(&[
            ("GEMINI_API_KEY", "secret"),
            ("PORT", "8081"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("GEMINI_API_BASE", "http://127.0.0.1:9999/v1beta/"),
        ])
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.gemini_api_base, "http://127.0.0.1:9999/v1beta");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = load(&[("GEMINI_API_KEY", "secret"), ("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
