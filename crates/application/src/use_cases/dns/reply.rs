//! Locally synthesized replies.

use hickory_proto::op::{Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// TTL of the unspecified-address answer given for blocked names.
pub const BLOCKED_TTL: u32 = 3600;

/// Empty NOERROR reply to `request`: same id and opcode, RD and CD copied, RA
/// set, first question echoed.
pub fn reply_to(request: &Message) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_checking_disabled(request.checking_disabled())
        .set_recursion_available(true)
        .set_response_code(ResponseCode::NoError);

    if let Some(query) = request.queries().first() {
        response.add_query(query.clone());
    }

    response
}

/// Reply for a denylisted question.
///
/// A and AAAA get one unspecified-address record; every other type gets a
/// NOERROR reply with no answers.
pub fn blocked_response(request: &Message, blocked: &Query) -> Message {
    let mut response = reply_to(request);
    let name = blocked.name().clone();

    let rdata = match blocked.query_type() {
        RecordType::A => Some(RData::A(A(Ipv4Addr::UNSPECIFIED))),
        RecordType::AAAA => Some(RData::AAAA(AAAA(Ipv6Addr::UNSPECIFIED))),
        _ => None,
    };

    if let Some(rdata) = rdata {
        response.add_answer(Record::from_rdata(name, BLOCKED_TTL, rdata));
    }

    response
}
