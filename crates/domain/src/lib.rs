//! dohhole domain layer
pub mod config;
pub mod errors;
pub mod question;
pub mod retry_policy;

pub use config::{
    BlockingConfig, CacheConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig,
    UpstreamConfig,
};
pub use errors::DomainError;
pub use question::{normalize_hostname, Question};
pub use retry_policy::{RetryAttempts, RetryPolicy};
