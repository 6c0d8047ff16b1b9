use std::sync::Arc;

/// The (name, type, class) tuple a client is asking about.
///
/// Names keep the trailing dot they arrived with; comparisons are
/// case-sensitive and only the trailing dot is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: u16,
    pub record_class: u16,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: u16, record_class: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
            record_class,
        }
    }

    /// Hostname with a single trailing dot removed.
    pub fn hostname(&self) -> &str {
        normalize_hostname(&self.name)
    }
}

/// Strips exactly one trailing dot.
#[inline]
pub fn normalize_hostname(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
