use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,

    pub port: u16,

    /// Largest datagram accepted from clients.
    pub udp_buffer_size: usize,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        match self.bind_address.parse::<IpAddr>() {
            Ok(IpAddr::V6(_)) => format!("[{}]:{}", self.bind_address, self.port),
            _ => format!("{}:{}", self.bind_address, self.port),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 53,
            udp_buffer_size: 65535,
        }
    }
}
