//! Hostname resolution for the HTTP clients through a fixed plain-DNS server.
//!
//! The proxy is usually the system resolver itself, so the upstream and
//! denylist hosts must not be resolved through the system.

use super::{DnsTransport, UdpTransport};
use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use dohhole_domain::DomainError;
use hickory_proto::rr::RecordType;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// `reqwest` resolver backed by A and AAAA lookups against one UDP server.
#[derive(Clone)]
pub struct BootstrapResolver {
    transport: Arc<UdpTransport>,
    timeout: Duration,
}

impl BootstrapResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: Arc::new(UdpTransport::new(server)),
            timeout,
        }
    }

    /// IPv4 and IPv6 addresses of `host`. An IP literal resolves to itself.
    pub async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        let start = Instant::now();
        let (v4, v6) = tokio::join!(
            self.query(host, RecordType::A),
            self.query(host, RecordType::AAAA)
        );

        let mut addresses = Vec::new();
        let mut last_error = None;
        for result in [v4, v6] {
            match result {
                Ok(found) => addresses.extend(found),
                Err(e) => last_error = Some(e),
            }
        }

        debug!(
            host,
            server = self.transport.server(),
            addresses = addresses.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Bootstrap resolution done"
        );

        if addresses.is_empty() {
            return Err(last_error.unwrap_or_else(|| DomainError::Transport {
                server: self.transport.server().to_string(),
                reason: format!("no addresses for {}", host),
            }));
        }

        Ok(addresses)
    }

    async fn query(&self, host: &str, record_type: RecordType) -> Result<Vec<IpAddr>, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(host, record_type)?;
        let response = self.transport.send(&bytes, self.timeout).await?;
        ResponseParser::parse_addresses(&response.bytes, id)
    }
}

impl Resolve for BootstrapResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let addresses = resolver.lookup(name.as_str()).await?;
            // port 0 lets the connector fill in the URL's port
            let addrs: Addrs = Box::new(
                addresses
                    .into_iter()
                    .map(|ip| SocketAddr::new(ip, 0)),
            );
            Ok(addrs)
        })
    }
}
