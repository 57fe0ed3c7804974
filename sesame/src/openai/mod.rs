mod accessor;
mod factory;

pub use accessor::ClientAccessor;
pub use factory::{ClientFactory, OpenAiClient, OpenAiClientFactory};
