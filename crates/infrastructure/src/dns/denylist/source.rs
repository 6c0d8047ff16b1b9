use async_trait::async_trait;
use dohhole_application::ports::DenylistSourcePort;
use dohhole_domain::DomainError;
use std::time::Duration;

/// Downloads the hosts file over HTTP(S).
///
/// `timeout` bounds a whole download, body included.
pub struct HttpDenylistSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpDenylistSource {
    pub fn new(client: reqwest::Client, url: String, timeout: Duration) -> Self {
        Self {
            client,
            url,
            timeout,
        }
    }
}

#[async_trait]
impl DenylistSourcePort for HttpDenylistSource {
    async fn fetch(&self) -> Result<String, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DomainError::BlocklistFetch(format!("fetch error for {}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(DomainError::BlocklistFetch(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::BlocklistFetch(format!("read error for {}: {}", self.url, e)))
    }

    fn location(&self) -> &str {
        &self.url
    }
}
