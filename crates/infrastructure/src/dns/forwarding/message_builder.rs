//! DNS Message Builder
//!
//! Constructs the plain recursive queries the bootstrap resolver sends.

use dohhole_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Recursive single-question query for `domain`, with a random id.
    ///
    /// Returns the id alongside the bytes for response matching.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let mut name = Name::from_ascii(domain).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("invalid domain '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        message.add_query(Query::query(name, record_type));

        let bytes = message
            .to_vec()
            .map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))?;
        Ok((id, bytes))
    }
}
