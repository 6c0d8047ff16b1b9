//! DNS-over-HTTPS transport (RFC 8484)
//!
//! Queries go out as HTTP GET requests with the wire-format message in the
//! `dns` query parameter, base64url-encoded without padding. The response body
//! is the raw wire-format answer.
//!
//! Wire format (HTTP):
//! ```text
//! GET /dns-query?dns=<base64url(message)> HTTP/2
//! Accept: application/dns-message
//! ```

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dohhole_domain::DomainError;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Content type for DNS-over-HTTPS bodies (RFC 8484 §6)
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// DNS-over-HTTPS transport (RFC 8484)
pub struct HttpsTransport {
    client: reqwest::Client,
    url: String,
    host: String,
}

impl HttpsTransport {
    /// `url` is the full endpoint, e.g. `https://dns.quad9.net/dns-query`.
    pub fn new(client: reqwest::Client, url: String, host: String) -> Self {
        Self { client, url, host }
    }

    /// Endpoint URL carrying `message_bytes` in the `dns` parameter.
    pub fn request_url(&self, message_bytes: &[u8]) -> String {
        format!("{}?dns={}", self.url, URL_SAFE_NO_PAD.encode(message_bytes))
    }

    fn transport_error(&self, reason: impl ToString) -> DomainError {
        DomainError::Transport {
            server: self.host.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        debug!(
            url = %self.url,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        let request = self
            .client
            .get(self.request_url(message_bytes))
            .header(ACCEPT, DNS_MESSAGE_CONTENT_TYPE)
            .build()
            .map_err(|e| DomainError::DohRequestBuild(e.to_string()))?;

        let started = Instant::now();
        let response = tokio::time::timeout(timeout, self.client.execute(request))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| self.transport_error(e))?;

        debug!(
            server = %self.host,
            peer = ?response.remote_addr(),
            version = ?response.version(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "DoH connection answered"
        );

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamStatus {
                server: self.host.clone(),
                status: status.as_u16(),
            });
        }

        let response_bytes = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| self.transport_error(e))?;

        debug!(
            url = %self.url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes.to_vec(),
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }

    fn server(&self) -> &str {
        &self.host
    }
}
