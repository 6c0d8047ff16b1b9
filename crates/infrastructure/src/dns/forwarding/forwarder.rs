use super::response_parser::ResponseParser;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use dohhole_application::ports::{ResponseCachePort, UpstreamForwarder};
use dohhole_domain::DomainError;
use hickory_proto::op::Message;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Forwards queries to the DoH upstream and feeds the response cache.
pub struct DohForwarder {
    transport: Arc<dyn DnsTransport>,
    cache: Arc<dyn ResponseCachePort>,
    timeout: Duration,
}

impl DohForwarder {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        cache: Arc<dyn ResponseCachePort>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            cache,
            timeout,
        }
    }
}

#[async_trait]
impl UpstreamForwarder for DohForwarder {
    async fn forward(&self, query: &Message) -> Result<Message, DomainError> {
        let request_bytes = query
            .to_vec()
            .map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))?;

        let response = self.transport.send(&request_bytes, self.timeout).await?;
        let message = ResponseParser::parse(&response.bytes)?;

        debug!(
            server = self.transport.server(),
            protocol = response.protocol_used,
            id = message.id(),
            answers = message.answers().len(),
            "Upstream response received"
        );

        let cache = Arc::clone(&self.cache);
        let cached_query = query.clone();
        let cached_response = message.clone();
        tokio::spawn(async move {
            cache.set(&cached_query, &cached_response);
        });

        Ok(message)
    }
}
