use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};

use crate::config::Config;
use crate::error::Result;

/// The constructed client handle, as provided by the SDK.
pub type OpenAiClient = Client<OpenAIConfig>;

/// Builds a client from a credential.
///
/// The accessor keeps construction behind this seam so tests can inject a
/// fake instead of the real SDK wiring.
pub trait ClientFactory: Send + Sync {
    fn build(&self, api_key: &str) -> Result<OpenAiClient>;
}

/// Default factory producing real SDK clients.
///
/// Performs no credential validation; an empty or malformed key flows
/// straight into the SDK config and fails at call time.
#[derive(Debug, Clone)]
pub struct OpenAiClientFactory {
    base_url: Option<String>,
    timeout_secs: u64,
}

impl OpenAiClientFactory {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

impl ClientFactory for OpenAiClientFactory {
    fn build(&self, api_key: &str) -> Result<OpenAiClient> {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base_url) = &self.base_url {
            openai_config = openai_config.with_api_base(base_url.clone());
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;

        // Configure async-openai's internal backoff to respect our timeout.
        // Without this, async-openai retries 500 errors with exponential
        // backoff for up to 15 minutes (the default max_elapsed_time).
        let backoff = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(self.timeout_secs)),
            ..Default::default()
        };

        Ok(Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(backoff))
    }
}
