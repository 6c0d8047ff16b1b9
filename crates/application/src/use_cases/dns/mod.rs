pub mod diagnostic;
pub mod handle_dns_query;
pub mod reply;

pub use diagnostic::{DiagnosticResponder, DIAGNOSTIC_NAME};
pub use handle_dns_query::{DnsReply, HandleDnsQueryUseCase, ReplySource};
pub use reply::{blocked_response, reply_to, BLOCKED_TTL};
