//! dohhole application layer: ports and the query-handling use case.
pub mod ports;
pub mod services;
pub mod use_cases;
