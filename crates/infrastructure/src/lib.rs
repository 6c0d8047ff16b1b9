//! dohhole adapters: response cache, denylist, DoH transport, datagram handler.
pub mod dns;
