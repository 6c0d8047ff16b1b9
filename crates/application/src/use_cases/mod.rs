pub mod dns;

pub use dns::{DiagnosticResponder, DnsReply, HandleDnsQueryUseCase, ReplySource};
