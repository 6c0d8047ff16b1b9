pub mod cache;
pub mod cache_maintenance;
pub mod denylist;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use cache::{cache_key, ResponseCache};
pub use cache_maintenance::ResponseCacheMaintenance;
pub use denylist::{DenylistStore, DenylistStoreConfig, HttpDenylistSource};
pub use forwarding::DohForwarder;
pub use server::DnsServerHandler;
pub use transport::{build_http_client, BootstrapResolver, DnsTransport, HttpsTransport};
