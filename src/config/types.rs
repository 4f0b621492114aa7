use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

/// Remote query endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// GraphQL endpoint URL (e.g., "https://graphql-pokemon2.vercel.app").
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Page size sent with the catalog query. `0` (or `None`) requests
    /// everything with the argument-less query.
    #[serde(default = "default_catalog_limit")]
    pub catalog_limit: Option<u32>,
}

fn default_url() -> String {
    "https://graphql-pokemon2.vercel.app".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_catalog_limit() -> Option<u32> {
    Some(151)
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    /// Page size to send with the catalog query, if any.
    pub fn catalog_page_size(&self) -> Option<u32> {
        self.catalog_limit.filter(|&limit| limit > 0)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            catalog_limit: default_catalog_limit(),
        }
    }
}
