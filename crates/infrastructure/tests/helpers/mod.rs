mod dns_server_mock;
mod mock_ports;

pub use dns_server_mock::*;
pub use mock_ports::*;
