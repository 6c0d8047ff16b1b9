use std::time::Duration;

/// DNS-over-HTTPS upstream.
///
/// The hostname can resolve to different addresses depending on location, so it
/// is looked up through `bootstrap_dns` instead of the system resolver.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub doh_hostname: String,

    pub doh_path: String,

    pub bootstrap_dns: String,

    pub request_timeout_secs: u64,

    pub idle_connection_timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn doh_url(&self) -> String {
        format!("https://{}{}", self.doh_hostname, self.doh_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn idle_connection_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_connection_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            // quad9 with malware blocking and dnssec validation
            doh_hostname: "dns.quad9.net".to_string(),
            doh_path: "/dns-query".to_string(),
            bootstrap_dns: "9.9.9.9:53".to_string(),
            request_timeout_secs: 10,
            // default idle timeout is 90s
            idle_connection_timeout_secs: 3600,
        }
    }
}
