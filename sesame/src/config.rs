use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// OpenAI access configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// API key used to authenticate. Empty means "not configured yet".
    pub api_key: String,
    /// Base URL override for OpenAI-compatible gateways and proxies.
    pub base_url: Option<String>,
    /// Timeout applied to the underlying HTTP client, in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY")
                .map(|key| key.trim().to_string())
                .unwrap_or_default(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            timeout_secs: parse_env_or("OPENAI_TIMEOUT_SECS", 30),
        }
    }
}

impl Config {
    /// Load configuration from the environment, honoring a `.env` file.
    ///
    /// A missing `OPENAI_API_KEY` yields an empty key rather than an error;
    /// callers decide how to treat the unconfigured state.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("OPENAI_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_config_defaults_without_env() {
        clear_env();

        let config = Config::default();
        assert_eq!(config.api_key, "");
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    #[serial]
    fn test_api_key_from_env_is_trimmed() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "  sk-test123  ");

        let config = Config::default();
        assert_eq!(config.api_key, "sk-test123");

        env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    #[serial]
    fn test_base_url_and_timeout_from_env() {
        clear_env();
        env::set_var("OPENAI_BASE_URL", "http://localhost:8080/v1");
        env::set_var("OPENAI_TIMEOUT_SECS", "5");

        let config = Config::default();
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
        assert_eq!(config.timeout_secs, 5);

        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("OPENAI_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_falls_back_to_default() {
        clear_env();
        env::set_var("OPENAI_TIMEOUT_SECS", "not-a-number");

        let config = Config::default();
        assert_eq!(config.timeout_secs, 30);

        env::remove_var("OPENAI_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_from_env_with_no_vars() {
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.api_key, "");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_deserializes() {
        let config: Config = serde_json::from_str(
            r#"{"api_key": "sk-file", "base_url": null, "timeout_secs": 10}"#,
        )
        .expect("config should deserialize");

        assert_eq!(config.api_key, "sk-file");
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout_secs, 10);
    }
}
