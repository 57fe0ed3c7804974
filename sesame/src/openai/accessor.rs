use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::openai::factory::{ClientFactory, OpenAiClient, OpenAiClientFactory};

struct AccessorState {
    api_key: String,
    client: Option<Arc<OpenAiClient>>,
}

/// Shared store for the OpenAI credential and the client built from it.
///
/// Credential and cached client live behind one mutex, so a credential swap
/// can never be observed next to a client built from the previous key.
/// Cloning shares the same state.
#[derive(Clone)]
pub struct ClientAccessor {
    factory: Arc<dyn ClientFactory>,
    state: Arc<Mutex<AccessorState>>,
}

impl ClientAccessor {
    /// Create an accessor wired to the real SDK factory, seeded with the
    /// configured credential.
    pub fn new(config: &Config) -> Self {
        Self::with_factory(&config.api_key, Arc::new(OpenAiClientFactory::new(config)))
    }

    /// Create an accessor with a custom client factory.
    pub fn with_factory(api_key: &str, factory: Arc<dyn ClientFactory>) -> Self {
        Self {
            factory,
            state: Arc::new(Mutex::new(AccessorState {
                api_key: api_key.trim().to_string(),
                client: None,
            })),
        }
    }

    /// Get the shared client, building it on first use.
    ///
    /// Returns `None` while no credential is configured. Repeated calls
    /// return the same handle without reconstruction.
    pub fn get_or_create(&self) -> Result<Option<Arc<OpenAiClient>>> {
        let mut state = self.state.lock().unwrap();

        if !state.api_key.is_empty() && state.client.is_none() {
            debug!("Building OpenAI client on first use");
            let client = self.factory.build(&state.api_key)?;
            state.client = Some(Arc::new(client));
        }

        Ok(state.client.clone())
    }

    /// Replace the credential and rebuild the client from it.
    ///
    /// The key is trimmed and stored even when empty; construction is a
    /// pass-through to the factory. The previous client is dropped before
    /// the factory runs, so a failed build leaves no stale handle behind.
    pub fn set_api_key(&self, key: &str) -> Result<Arc<OpenAiClient>> {
        let mut state = self.state.lock().unwrap();

        state.api_key = key.trim().to_string();
        state.client = None;

        info!(
            key_len = state.api_key.len(),
            "Credential replaced, rebuilding OpenAI client"
        );
        let client = Arc::new(self.factory.build(&state.api_key)?);
        state.client = Some(Arc::clone(&client));

        Ok(client)
    }

    /// Whether a non-empty credential is stored.
    ///
    /// Pure read; does not look at (or build) the client.
    pub fn is_configured(&self) -> bool {
        let state = self.state.lock().unwrap();
        !state.api_key.is_empty()
    }
}
