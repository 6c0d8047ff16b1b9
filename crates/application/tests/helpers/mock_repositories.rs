#![allow(dead_code)]

use async_trait::async_trait;
use dohhole_application::ports::{DenylistPort, ResponseCachePort, UpstreamForwarder};
use dohhole_domain::{normalize_hostname, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
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

pub fn a_response(request: &Message, ip: Ipv4Addr, ttl: u32) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_recursion_available(true);
    let query = request.queries()[0].clone();
    response.add_answer(Record::from_rdata(
        query.name().clone(),
        ttl,
        RData::A(A(ip)),
    ));
    response.add_query(query);
    response
}

fn question_key(message: &Message) -> Option<(String, RecordType)> {
    message
        .queries()
        .first()
        .map(|q| (q.name().to_ascii(), q.query_type()))
}

#[derive(Clone, Default)]
pub struct MockDenylist {
    blocked: Arc<RwLock<HashSet<String>>>,
    ensure_fresh_calls: Arc<AtomicUsize>,
}

impl MockDenylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_domain(&self, domain: &str) {
        self.blocked.write().unwrap().insert(domain.to_string());
    }

    pub fn ensure_fresh_calls(&self) -> usize {
        self.ensure_fresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DenylistPort for MockDenylist {
    fn is_blocked(&self, hostname: &str) -> bool {
        self.blocked
            .read()
            .unwrap()
            .contains(normalize_hostname(hostname))
    }

    async fn ensure_fresh(&self) -> bool {
        self.ensure_fresh_calls.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn blocked_count(&self) -> usize {
        self.blocked.read().unwrap().len()
    }
}

#[derive(Clone, Default)]
pub struct MockResponseCache {
    entries: Arc<RwLock<HashMap<(String, RecordType), Message>>>,
    set_calls: Arc<AtomicUsize>,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, query: &Message, response: Message) {
        if let Some(key) = question_key(query) {
            self.entries.write().unwrap().insert(key, response);
        }
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }
}

impl ResponseCachePort for MockResponseCache {
    fn get(&self, query: &Message) -> Option<Message> {
        let key = question_key(query)?;
        let mut hit = self.entries.read().unwrap().get(&key).cloned()?;
        hit.set_id(query.id());
        Some(hit)
    }

    fn set(&self, query: &Message, response: &Message) {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.insert(query, response.clone());
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

/// Upstream that answers from a table, optionally after a delay, and writes
/// successful answers into the paired cache the way the DoH forwarder does.
#[derive(Clone, Default)]
pub struct MockUpstreamForwarder {
    responses: Arc<RwLock<HashMap<(String, RecordType), Ipv4Addr>>>,
    cache: Option<Arc<MockResponseCache>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(mut self, cache: Arc<MockResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, ip: Ipv4Addr) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), ip);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &Message) -> Result<Message, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let key = question_key(query)
            .ok_or_else(|| DomainError::InvalidDnsMessage("no question".to_string()))?;
        let ip = self
            .responses
            .read()
            .unwrap()
            .get(&key)
            .copied()
            .ok_or_else(|| DomainError::Transport {
                server: "mock".to_string(),
                reason: format!("no response for {}", key.0),
            })?;

        let response = a_response(query, ip, 300);
        if let Some(cache) = &self.cache {
            cache.set(query, &response);
        }
        Ok(response)
    }
}
