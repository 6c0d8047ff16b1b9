use hickory_proto::op::Message;

/// Port for the question-keyed response cache.
pub trait ResponseCachePort: Send + Sync {
    /// Cached response for the query's first question, with the reply
    /// identifier rewritten to `query.id()`. Expired entries are misses.
    fn get(&self, query: &Message) -> Option<Message>;

    /// Store a copy of `response`, expiring after its lowest answer TTL.
    fn set(&self, query: &Message, response: &Message);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
