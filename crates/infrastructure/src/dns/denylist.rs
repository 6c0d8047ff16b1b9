pub mod parser;
pub mod source;
pub mod store;

pub use parser::{parse_hosts, parse_hosts_line};
pub use source::HttpDenylistSource;
pub use store::{format_duration, DenylistSnapshot, DenylistStore, DenylistStoreConfig};
