//! Runtime configuration loaded from the environment.

use crate::{Error, Result};

const DEFAULT_CORS_ORIGINS: &[&str] = &["https://moodmagic.app", "http://localhost:3000"];

/// Sequential outbound calls in one generation: the model, then image search.
const OUTBOUND_CALLS_PER_REQUEST: u64 = 2;
const HTTP_TIMEOUT_MARGIN_SECS: u64 = 5;

/// Placeholder value shipped in sample `.env` files for the image search key.
pub const SERPAPI_PLACEHOLDER_KEY: &str = "your_serpapi_key";

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_env: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub serpapi_key: String,
    pub serpapi_base_url: String,
    pub database_url: String,
    pub cors_origins: Vec<String>,
    /// Per-call timeout for outbound model and image search requests.
    pub request_timeout_secs: u64,
    /// Inbound request timeout. Must exceed the outbound calls a generation
    /// makes in sequence.
    pub http_timeout_secs: u64,
    // Not read by any current flow.
    pub jwt_secret: Option<String>,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `OPENAI_API_KEY` and `SERPAPI_KEY` are required; everything else has a
    /// development default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());
        let required = |key: &str| get(key).ok_or_else(|| Error::Config(format!("{} not set", key)));

        let port = or("PORT", "8000")
            .parse::<u16>()
            .map_err(|e| Error::Config(format!("PORT must be a valid port number: {}", e)))?;

        let request_timeout_secs = or("REQUEST_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| Error::Config(format!("REQUEST_TIMEOUT_SECS must be an integer: {}", e)))?;

        let http_timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("HTTP_TIMEOUT_SECS must be an integer: {}", e)))?,
            None => default_http_timeout_secs(request_timeout_secs),
        };
        if http_timeout_secs <= request_timeout_secs.saturating_mul(OUTBOUND_CALLS_PER_REQUEST) {
            return Err(Error::Config(format!(
                "HTTP_TIMEOUT_SECS ({}) must exceed {} x REQUEST_TIMEOUT_SECS ({})",
                http_timeout_secs, OUTBOUND_CALLS_PER_REQUEST, request_timeout_secs
            )));
        }

        let cors_origins = match get("CORS_ORIGINS") {
            Some(raw) => parse_cors_origins(&raw)?,
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            app_name: or("APP_NAME", "MoodMagic"),
            app_env: or("APP_ENV", "development"),
            base_url: or("BASE_URL", "http://localhost:8000"),
            host: or("HOST", "0.0.0.0"),
            port,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_model: or("OPENAI_MODEL", "gpt-4"),
            openai_base_url: or("OPENAI_BASE_URL", "https://api.openai.com"),
            serpapi_key: required("SERPAPI_KEY")?,
            serpapi_base_url: or("SERPAPI_BASE_URL", "https://serpapi.com"),
            database_url: or("DATABASE_URL", "sqlite://moodmagic.db"),
            cors_origins,
            request_timeout_secs,
            http_timeout_secs,
            jwt_secret: get("JWT_SECRET"),
            stripe_secret_key: or("STRIPE_SECRET_KEY", ""),
            stripe_webhook_secret: or("STRIPE_WEBHOOK_SECRET", ""),
        })
    }

    /// The image search key, or `None` when it is the sample placeholder.
    pub fn image_search_key(&self) -> Option<String> {
        if self.serpapi_key == SERPAPI_PLACEHOLDER_KEY {
            None
        } else {
            Some(self.serpapi_key.clone())
        }
    }
}

/// Inbound limit that leaves room for every outbound call to time out on its
/// own and still fall back.
pub fn default_http_timeout_secs(request_timeout_secs: u64) -> u64 {
    request_timeout_secs
        .saturating_mul(OUTBOUND_CALLS_PER_REQUEST)
        .saturating_add(HTTP_TIMEOUT_MARGIN_SECS)
}

/// Accept either a JSON list (`["a", "b"]`) or a comma-separated string.
pub fn parse_cors_origins(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim();
    let entries: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
            .map_err(|e| Error::Config(format!("CORS_ORIGINS is not a valid list: {}", e)))?
    } else {
        trimmed.split(',').map(str::to_string).collect()
    };

    Ok(entries
        .into_iter()
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect())
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
        move |key| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[("OPENAI_API_KEY", "sk-test"), ("SERPAPI_KEY", "serp-test")];

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.database_url, "sqlite://moodmagic.db");
        assert_eq!(
            config.cors_origins,
            vec!["https://moodmagic.app", "http://localhost:3000"]
        );
        assert!(config.jwt_secret.is_none());
        assert_eq!(config.stripe_secret_key, "");
    }

    #[test]
    fn test_missing_required_key_fails() {
        let err = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("SERPAPI_KEY")));

        let err = Config::from_lookup(lookup_from(&[("SERPAPI_KEY", "x")])).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("OPENAI_API_KEY")));
    }

    #[test]
    fn test_blank_required_key_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "  "),
            ("SERPAPI_KEY", "serp-test"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_port_fails() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "eighty"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn test_inbound_timeout_outlasts_outbound_calls() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.http_timeout_secs, 65);

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("REQUEST_TIMEOUT_SECS", "1"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.http_timeout_secs, 7);
    }

    #[test]
    fn test_inbound_timeout_too_short_fails() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("REQUEST_TIMEOUT_SECS", "10"));
        pairs.push(("HTTP_TIMEOUT_SECS", "15"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("HTTP_TIMEOUT_SECS")));

        pairs.pop();
        pairs.push(("HTTP_TIMEOUT_SECS", "25"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.http_timeout_secs, 25);
    }

    #[test]
    fn test_cors_origins_comma_separated() {
        let origins = parse_cors_origins("https://a.test, https://b.test ,,").unwrap();
        assert_eq!(origins, vec!["https://a.test", "https://b.test"]);
    }

    #[test]
    fn test_cors_origins_json_list() {
        let origins = parse_cors_origins(r#"["https://a.test", " https://b.test "]"#).unwrap();
        assert_eq!(origins, vec!["https://a.test", "https://b.test"]);
    }

    #[test]
    fn test_cors_origins_broken_json_list_fails() {
        assert!(parse_cors_origins(r#"["https://a.test""#).is_err());
    }

    #[test]
    fn test_placeholder_image_key_is_treated_as_absent() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("SERPAPI_KEY", SERPAPI_PLACEHOLDER_KEY),
        ]))
        .unwrap();
        assert_eq!(config.image_search_key(), None);

        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();
        assert_eq!(config.image_search_key().as_deref(), Some("serp-test"));
    }
}
