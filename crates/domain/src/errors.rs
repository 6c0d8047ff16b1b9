use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Failed to create DoH request: {0}")]
    DohRequestBuild(String),

    #[error("Failed DoH request to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("DoH server {server} returned HTTP {status}")]
    UpstreamStatus { server: String, status: u16 },

    #[error("Failed to convert DoH response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Blocklist fetch error: {0}")]
    BlocklistFetch(String),

    #[error("Blocklist source {0} contained no blocked hosts")]
    EmptyDenylist(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Network-level failures, as opposed to malformed payloads.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::UpstreamStatus { .. } | Self::QueryTimeout
        )
    }
}
