#![allow(dead_code)]
use async_trait::async_trait;
use dohhole_application::ports::DenylistSourcePort;
use dohhole_domain::DomainError;
use dohhole_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message
}

/// Response to `request` with one A answer per `(ip, ttl)` pair.
pub fn response_with_answers(request: &Message, answers: &[(Ipv4Addr, u32)]) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_recursion_available(true);
    let query = request.queries()[0].clone();
    for (ip, ttl) in answers {
        response.add_answer(Record::from_rdata(
            query.name().clone(),
            *ttl,
            RData::A(A(*ip)),
        ));
    }
    response.add_query(query);
    response
}

/// Hosts-file source that replays scripted results, then repeats the last one.
pub struct MockDenylistSource {
    results: Mutex<VecDeque<Result<String, DomainError>>>,
    last: Mutex<Option<Result<String, DomainError>>>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl MockDenylistSource {
    pub fn new(results: Vec<Result<String, DomainError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            last: Mutex::new(None),
            delay: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn serving(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(DomainError::BlocklistFetch("unreachable".to_string()))])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DenylistSourcePort for MockDenylistSource {
    async fn fetch(&self) -> Result<String, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.results.lock().unwrap().pop_front();
        match next {
            Some(result) => {
                *self.last.lock().unwrap() = Some(result.clone());
                result
            }
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Err(DomainError::BlocklistFetch("exhausted".to_string()))),
        }
    }

    fn location(&self) -> &str {
        "mock://hosts"
    }
}

/// Transport that answers every query with a fixed payload or error.
pub struct MockTransport {
    reply: Mutex<Box<dyn Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send>>,
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn new<F>(reply: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + 'static,
    {
        Self {
            reply: Mutex::new(Box::new(reply)),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Echoes the query back as a response with the given A answers.
    pub fn answering(answers: Vec<(Ipv4Addr, u32)>) -> Self {
        Self::new(move |bytes| {
            let request = Message::from_vec(bytes).unwrap();
            Ok(response_with_answers(&request, &answers).to_vec().unwrap())
        })
    }

    pub fn failing(error: DomainError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    pub fn sent(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());
        let bytes = (self.reply.lock().unwrap())(message_bytes)?;
        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }

    fn server(&self) -> &str {
        "mock"
    }
}
