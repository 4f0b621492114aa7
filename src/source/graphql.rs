//! GraphQL-over-HTTP source for the remote catalog API.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::EndpointConfig;
use crate::schema::{CatalogEntity, EntityDetail, EntityKey};

use super::error::QueryError;
use super::traits::CatalogSource;

/// Catalog query, unbounded.
pub const CATALOG_QUERY: &str = r#"query pokemons {
  pokemons {
    id
    number
    name
    image
    types
  }
}"#;

/// Catalog query for backends that require a page size.
pub const CATALOG_QUERY_LIMITED: &str = r#"query pokemons($first: Int!) {
  pokemons(first: $first) {
    id
    number
    name
    image
    types
  }
}"#;

/// Single entity query, addressed by id or name.
pub const ENTITY_QUERY: &str = r#"query pokemon($id: String, $name: String) {
  pokemon(id: $id, name: $name) {
    id
    number
    name
    weight {
      minimum
      maximum
    }
    height {
      minimum
      maximum
    }
    classification
    types
    resistant
    weaknesses
    fleeRate
    maxCP
    maxHP
    image
  }
}"#;

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Serialize)]
struct CatalogVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    first: Option<u32>,
}

#[derive(Serialize)]
struct EntityVariables<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Deserialize)]
struct CatalogData {
    pokemons: Option<Vec<CatalogEntity>>,
}

#[derive(Deserialize)]
struct EntityData {
    pokemon: Option<EntityDetail>,
}

/// Source that posts GraphQL documents to a single endpoint.
pub struct GraphQlSource {
    client: Client,
    endpoint: String,
    catalog_limit: Option<u32>,
}

impl GraphQlSource {
    /// Build a source from endpoint configuration.
    pub fn new(config: &EndpointConfig) -> Result<Self, QueryError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(QueryError::Client)?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
            catalog_limit: config.catalog_page_size(),
        })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(
        &self,
        operation: &'static str,
        query: &str,
        variables: V,
    ) -> Result<T, QueryError>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        tracing::debug!(
            endpoint = %self.endpoint,
            operation,
            "Sending query"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|e| QueryError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| QueryError::Transport {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(
                operation,
                status = %status,
                latency_ms,
                "Query endpoint returned error status"
            );
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_str(&body)?;

        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
            tracing::warn!(operation, errors = ?messages, latency_ms, "Query returned errors");
            return Err(QueryError::GraphQl { messages });
        }

        tracing::debug!(operation, latency_ms, "Query completed");

        envelope.data.ok_or(QueryError::EmptyResponse)
    }
}

#[async_trait]
impl CatalogSource for GraphQlSource {
    fn name(&self) -> &'static str {
        "graphql"
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogEntity>, QueryError> {
        let query = match self.catalog_limit {
            Some(_) => CATALOG_QUERY_LIMITED,
            None => CATALOG_QUERY,
        };
        let variables = CatalogVariables {
            first: self.catalog_limit,
        };

        let data: CatalogData = self.execute("pokemons", query, variables).await?;
        Ok(data.pokemons.unwrap_or_default())
    }

    async fn get_entity(&self, key: &EntityKey) -> Result<Option<EntityDetail>, QueryError> {
        if key.is_none() {
            return Err(QueryError::MissingKey);
        }

        let (id, name) = key.as_parts();
        let data: EntityData = self
            .execute("pokemon", ENTITY_QUERY, EntityVariables { id, name })
            .await?;
        Ok(data.pokemon)
    }
}
