pub mod retry;

pub use retry::{retry, retry_with_output};
