//! Configuration for the remote query endpoint.

mod loader;
mod types;

pub use loader::{ConfigError, ENDPOINT_ENV_VAR};
pub use types::{Config, EndpointConfig};
