use super::BootstrapResolver;
use dohhole_domain::{DomainError, UpstreamConfig};
use std::net::SocketAddr;
use std::sync::Arc;

const USER_AGENT: &str = concat!("dohhole/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP/2 client for the DoH upstream and the denylist download.
///
/// Host names are resolved through the bootstrap server and idle connections
/// are kept for `idle_connection_timeout`. `verbose` turns on per-connection
/// tracing.
pub fn build_http_client(
    upstream: &UpstreamConfig,
    verbose: bool,
) -> Result<reqwest::Client, DomainError> {
    let bootstrap: SocketAddr = upstream.bootstrap_dns.parse().map_err(|_| {
        DomainError::ConfigError(format!(
            "invalid bootstrap DNS address: {}",
            upstream.bootstrap_dns
        ))
    })?;

    let resolver = BootstrapResolver::new(bootstrap, upstream.request_timeout());

    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .dns_resolver(Arc::new(resolver))
        .pool_idle_timeout(upstream.idle_connection_timeout())
        .connection_verbose(verbose)
        .build()
        .map_err(|e| DomainError::ConfigError(format!("failed to build HTTP client: {}", e)))
}
