//! Responder for the reserved diagnostic name.

use super::reply::reply_to;
use hickory_proto::op::Message;
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{RData, Record};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

pub const DIAGNOSTIC_NAME: &str = "doh.hole.";

const ROTATING_LINES: [&str; 3] = [
    "nothing to see here",
    "ads in, silence out",
    "still resolving",
];

/// Answers `doh.hole.` with TXT records describing this instance.
pub struct DiagnosticResponder {
    rotation: AtomicUsize,
    hostname: String,
    version: String,
}

impl DiagnosticResponder {
    pub fn new(version: impl Into<String>) -> Self {
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            rotation: AtomicUsize::new(0),
            hostname,
            version: version.into(),
        }
    }

    /// Whether the first question asks for the diagnostic name (exact match).
    pub fn matches(request: &Message) -> bool {
        request
            .queries()
            .first()
            .is_some_and(|q| q.name().to_ascii() == DIAGNOSTIC_NAME)
    }

    /// `Some(reply)` if `request` is a diagnostic query.
    pub fn respond(&self, request: &Message) -> Option<Message> {
        if !Self::matches(request) {
            return None;
        }

        let name = request.queries().first()?.name().clone();
        let index = (self.rotation.fetch_add(1, Ordering::Relaxed) + 1) % ROTATING_LINES.len();

        let lines = [
            ROTATING_LINES[index].to_string(),
            format!("hostname: {}", self.hostname),
            format!("time: {}", chrono::Local::now().format("%H:%M:%S")),
            self.version.clone(),
        ];

        let mut response = reply_to(request);
        for line in lines {
            response.add_answer(Record::from_rdata(
                name.clone(),
                0,
                RData::TXT(TXT::new(vec![line])),
            ));
        }

        debug!(answers = response.answers().len(), "Diagnostic query answered");
        Some(response)
    }
}
