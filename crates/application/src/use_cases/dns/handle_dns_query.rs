use super::diagnostic::DiagnosticResponder;
use super::reply::blocked_response;
use crate::ports::{DenylistPort, ResponseCachePort, UpstreamForwarder};
use hickory_proto::op::{Message, Query};
use std::sync::Arc;
use tracing::{debug, warn};

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Diagnostic,
    Blocked,
    Cache,
    Upstream,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnostic => "diagnostic",
            Self::Blocked => "blocked",
            Self::Cache => "cache",
            Self::Upstream => "upstream",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DnsReply {
    pub message: Message,
    pub source: ReplySource,
}

impl DnsReply {
    fn new(message: Message, source: ReplySource) -> Self {
        Self { message, source }
    }
}

/// Routes one inbound query: diagnostic, then denylist, then cache, then upstream.
pub struct HandleDnsQueryUseCase {
    denylist: Arc<dyn DenylistPort>,
    cache: Arc<dyn ResponseCachePort>,
    upstream: Arc<dyn UpstreamForwarder>,
    diagnostic: Arc<DiagnosticResponder>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        denylist: Arc<dyn DenylistPort>,
        cache: Arc<dyn ResponseCachePort>,
        upstream: Arc<dyn UpstreamForwarder>,
        diagnostic: Arc<DiagnosticResponder>,
    ) -> Self {
        Self {
            denylist,
            cache,
            upstream,
            diagnostic,
        }
    }

    /// Produce the reply for `query`, or `None` when nothing should be sent.
    ///
    /// Only a cache miss waits on the network.
    pub async fn execute(&self, query: &Message) -> Option<DnsReply> {
        self.spawn_denylist_check();

        if let Some(response) = self.diagnostic.respond(query) {
            return Some(DnsReply::new(response, ReplySource::Diagnostic));
        }

        if let Some(blocked) = self.find_blocked_question(query) {
            debug!(domain = %blocked.name(), record_type = %blocked.query_type(), "Domain blocked");
            return Some(DnsReply::new(
                blocked_response(query, blocked),
                ReplySource::Blocked,
            ));
        }

        if let Some(cached) = self.cache.get(query) {
            // still fetch and cache in case it changed
            self.spawn_revalidate(query.clone());
            return Some(DnsReply::new(cached, ReplySource::Cache));
        }

        match self.upstream.forward(query).await {
            Ok(response) => Some(DnsReply::new(response, ReplySource::Upstream)),
            Err(e) if e.is_transport_error() => {
                debug!(error = %e, id = query.id(), "Upstream forward failed, dropping query");
                None
            }
            Err(e) => {
                warn!(error = %e, id = query.id(), "Upstream reply unusable, dropping query");
                None
            }
        }
    }

    /// First question whose hostname is denylisted; later questions are not
    /// considered.
    fn find_blocked_question<'a>(&self, query: &'a Message) -> Option<&'a Query> {
        query
            .queries()
            .iter()
            .find(|q| self.denylist.is_blocked(&q.name().to_ascii()))
    }

    fn spawn_denylist_check(&self) {
        let denylist = Arc::clone(&self.denylist);
        tokio::spawn(async move {
            denylist.ensure_fresh().await;
        });
    }

    fn spawn_revalidate(&self, query: Message) {
        let upstream = Arc::clone(&self.upstream);
        tokio::spawn(async move {
            if let Err(e) = upstream.forward(&query).await {
                debug!(error = %e, "Background cache refresh failed");
            }
        });
    }
}
