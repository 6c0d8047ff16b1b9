use dohhole_application::use_cases::{DnsReply, HandleDnsQueryUseCase, ReplySource};
use dohhole_domain::Question;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Turns one inbound datagram into at most one outbound datagram.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Wire-format reply for `datagram`, or `None` when nothing should be sent
    /// (undecodable query, failed forward, unencodable reply).
    pub async fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match Message::from_vec(datagram) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, client = %client, "Dropping undecodable query");
                return None;
            }
        };

        if let Some(question) = first_question(&query) {
            debug!(
                domain = question.hostname(),
                record_type = question.record_type,
                client = %client,
                "DNS query received"
            );
        }

        let DnsReply { message, source } = self.use_case.execute(&query).await?;

        if source == ReplySource::Diagnostic {
            info!(client = %client, "Diagnostic query");
        }

        match message.to_vec() {
            Ok(bytes) => {
                debug!(id = message.id(), source = source.as_str(), "Sending response");
                Some(bytes)
            }
            Err(e) => {
                error!(error = %e, "Failed to encode response");
                None
            }
        }
    }
}

fn first_question(message: &Message) -> Option<Question> {
    message.queries().first().map(|q| {
        Question::new(
            q.name().to_ascii(),
            u16::from(q.query_type()),
            u16::from(q.query_class()),
        )
    })
}
