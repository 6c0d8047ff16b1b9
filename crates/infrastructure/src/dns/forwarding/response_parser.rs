use dohhole_domain::DomainError;
use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("failed to parse DNS response: {}", e))
        })
    }

    /// Addresses from the A and AAAA answers of a response to query `expected_id`.
    pub fn parse_addresses(
        response_bytes: &[u8],
        expected_id: u16,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let message = Self::parse(response_bytes)?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }

        let addresses: Vec<IpAddr> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                _ => None,
            })
            .collect();

        debug!(
            rcode = ?message.response_code(),
            addresses = addresses.len(),
            "DNS response parsed"
        );

        Ok(addresses)
    }
}
