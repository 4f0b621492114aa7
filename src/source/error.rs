//! Error types for query sources.

use thiserror::Error;

/// Errors that can occur while executing a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A detail lookup was attempted without any key
    #[error("No lookup key supplied")]
    MissingKey,

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response carried a GraphQL `errors` array
    #[error("Query returned errors: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response had neither data nor errors
    #[error("Response contained no data")]
    EmptyResponse,
}

impl QueryError {
    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            QueryError::Status { status, .. } => Some(*status),
            QueryError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short machine-readable error kind.
    pub fn error_type(&self) -> &'static str {
        match self {
            QueryError::MissingKey => "missing_key",
            QueryError::Client(_) => "client_error",
            QueryError::Transport { source, .. } if source.is_timeout() => "timeout",
            QueryError::Transport { .. } => "connection_error",
            QueryError::Status { .. } => "status_error",
            QueryError::GraphQl { .. } => "graphql_error",
            QueryError::Decode(_) => "decode_error",
            QueryError::EmptyResponse => "empty_response",
        }
    }
}

/// Failure outcome surfaced in a fetch result's `error` field.
///
/// Unlike [`QueryError`] this is cloneable and comparable, so it can live in
/// observable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: &'static str,
    pub message: String,
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }
}

impl From<&QueryError> for TransportError {
    fn from(err: &QueryError) -> Self {
        Self {
            kind: err.error_type(),
            message: err.to_string(),
            status: err.status(),
        }
    }
}

impl From<QueryError> for TransportError {
    fn from(err: QueryError) -> Self {
        Self::from(&err)
    }
}
