use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique number assigned to every established connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ConnectionId(u64);

impl ConnectionId {
    fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A connection-like handle shared by every caller of a registry.
///
/// `connected` stands in for a real driver handle. Registries hand this out
/// behind an `Arc`, so identity is compared with `Arc::ptr_eq`; `id` makes the
/// same identity visible in logs. Equality compares `id` only.
#[derive(Debug, Serialize)]
pub struct SharedConnection {
    id: ConnectionId,
    url: String,
    connected: AtomicBool,
}

impl PartialEq for SharedConnection {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SharedConnection {}

impl SharedConnection {
    /// Builds a connection marker bound to `url` with a fresh id.
    pub fn new(url: impl Into<String>, connected: bool) -> Self {
        Self {
            id: ConnectionId::next(),
            url: url.into(),
            connected: AtomicBool::new(connected),
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Marks the connection closed. Handles still held by callers observe it.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::Release);
    }
}

impl fmt::Display for SharedConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ connection: {}, url: {:?}, id: {} }}",
            self.is_connected(),
            self.url,
            self.id
        )
    }
}
