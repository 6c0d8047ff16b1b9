use async_trait::async_trait;
use dohhole_domain::DomainError;

/// Where the hosts-format denylist text comes from.
#[async_trait]
pub trait DenylistSourcePort: Send + Sync {
    async fn fetch(&self) -> Result<String, DomainError>;

    fn location(&self) -> &str;
}
