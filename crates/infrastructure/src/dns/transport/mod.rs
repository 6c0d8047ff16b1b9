pub mod bootstrap;
pub mod client;
pub mod https;
pub mod udp;

use async_trait::async_trait;
use dohhole_domain::DomainError;
use std::time::Duration;

pub use bootstrap::BootstrapResolver;
pub use client::build_http_client;
pub use https::HttpsTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;

    /// Host or address the transport talks to, for logs and errors.
    fn server(&self) -> &str;
}
