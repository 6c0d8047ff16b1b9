pub mod forwarder;
pub mod message_builder;
pub mod response_parser;

pub use forwarder::DohForwarder;
pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;
