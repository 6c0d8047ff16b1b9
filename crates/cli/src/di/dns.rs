use dohhole_application::ports::CacheMaintenancePort;
use dohhole_application::use_cases::{DiagnosticResponder, HandleDnsQueryUseCase};
use dohhole_domain::Config;
use dohhole_infrastructure::dns::{
    build_http_client, DenylistStore, DenylistStoreConfig, DnsServerHandler, DohForwarder,
    HttpDenylistSource, HttpsTransport, ResponseCache, ResponseCacheMaintenance,
};
use std::sync::Arc;
use tracing::info;

const VERSION: &str = concat!("dohhole ", env!("CARGO_PKG_VERSION"));

pub struct DnsServices {
    pub denylist: Arc<DenylistStore>,
    pub handler: DnsServerHandler,
    pub cache_maintenance: Arc<dyn CacheMaintenancePort>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!(
            upstream = %config.upstream.doh_hostname,
            bootstrap = %config.upstream.bootstrap_dns,
            "Initializing DNS services"
        );

        let client = build_http_client(&config.upstream, config.logging.debug)?;

        let transport = Arc::new(HttpsTransport::new(
            client.clone(),
            config.upstream.doh_url(),
            config.upstream.doh_hostname.clone(),
        ));

        let cache = Arc::new(ResponseCache::new());
        let forwarder = Arc::new(DohForwarder::new(
            transport,
            cache.clone(),
            config.upstream.request_timeout(),
        ));

        let denylist = Self::build_denylist(config, client);

        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            denylist.clone(),
            cache.clone(),
            forwarder,
            Arc::new(DiagnosticResponder::new(VERSION)),
        ));

        let cache_maintenance =
            Arc::new(ResponseCacheMaintenance::new(cache)) as Arc<dyn CacheMaintenancePort>;

        Ok(Self {
            denylist,
            handler: DnsServerHandler::new(use_case),
            cache_maintenance,
        })
    }

    fn build_denylist(config: &Config, client: reqwest::Client) -> Arc<DenylistStore> {
        let source = Arc::new(HttpDenylistSource::new(
            client,
            config.blocking.hosts_url.clone(),
            config.blocking.fetch_timeout(),
        ));

        Arc::new(DenylistStore::new(
            source,
            DenylistStoreConfig {
                refresh_interval: config.blocking.refresh_interval(),
                refresh_policy: config.blocking.refresh_retry_policy(),
                startup_policy: config.blocking.startup_retry_policy(),
            },
        ))
    }
}
