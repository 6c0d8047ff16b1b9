mod cache_maintenance_port;
mod denylist;
mod denylist_source;
mod response_cache;
mod upstream_forwarder;

pub use cache_maintenance_port::{CacheMaintenancePort, CacheReapOutcome};
pub use denylist::DenylistPort;
pub use denylist_source::DenylistSourcePort;
pub use response_cache::ResponseCachePort;
pub use upstream_forwarder::UpstreamForwarder;
