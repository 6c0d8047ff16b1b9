use async_trait::async_trait;
use dohhole_domain::DomainError;
use hickory_proto::op::Message;

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Resolve `query` upstream. Implementations cache successful responses
    /// without making the caller wait, and never retry.
    async fn forward(&self, query: &Message) -> Result<Message, DomainError>;
}
