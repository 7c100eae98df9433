use crate::domain::connection::SharedConnection;
use crate::domain::ports::ConnectorBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryConnector;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Holds at most one live `SharedConnection` and hands the same one to every caller.
///
/// The first `acquire` establishes the connection through the configured
/// `Connector`; later calls return it unchanged until `release` clears the slot.
pub struct ConnectionRegistry {
    connector: ConnectorBox,
    slot: Mutex<Option<Arc<SharedConnection>>>,
}

impl ConnectionRegistry {
    /// Creates an empty registry that connects through `connector`.
    pub fn new(connector: ConnectorBox) -> Self {
        Self {
            connector,
            slot: Mutex::new(None),
        }
    }

    /// Creates an empty registry backed by `InMemoryConnector`.
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryConnector::new()))
    }

    // The slot only ever holds a complete `Option`, so a panic in another
    // holder cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<SharedConnection>>> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the shared connection, establishing it for `url` if none exists.
    ///
    /// When a connection is already present `url` is ignored: the first
    /// caller's url stays in effect until `release`.
    pub fn acquire(&self, url: &str) -> Result<Arc<SharedConnection>> {
        let mut slot = self.lock();

        if let Some(existing) = slot.as_ref() {
            if existing.url() != url {
                debug!(
                    connection_id = %existing.id(),
                    bound_url = existing.url(),
                    requested_url = url,
                    "Ignoring url of later acquire"
                );
            }
            debug!(connection_id = %existing.id(), "Instance already present");
            return Ok(Arc::clone(existing));
        }

        let connection = Arc::new(self.connector.connect(url)?);
        info!(connection_id = %connection.id(), url, "New database instance created");
        *slot = Some(Arc::clone(&connection));
        Ok(connection)
    }

    /// Returns the live connection, if any.
    pub fn current(&self) -> Option<Arc<SharedConnection>> {
        self.lock().clone()
    }

    /// Disconnects the live connection and clears the slot. Idempotent.
    ///
    /// Handles obtained earlier stay valid but report `is_connected() == false`,
    /// so at most one connected instance exists per registry.
    pub fn release(&self) {
        match self.lock().take() {
            Some(connection) => {
                connection.disconnect();
                info!(connection_id = %connection.id(), "Database instance released")
            }
            None => debug!("Release with no live instance"),
        }
    }

    pub fn is_present(&self) -> bool {
        self.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_absent() {
        let registry = ConnectionRegistry::in_memory();
        assert!(!registry.is_present());
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_acquire_returns_same_instance() {
        let registry = ConnectionRegistry::in_memory();
        let first = registry.acquire("connectToDbUrl.com").unwrap();
        let second = registry.acquire("connectToDbUrl.com").unwrap();
        let third = registry.acquire("connectToDbUrl.com").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &third));
        assert!(first.is_connected());
    }

    #[test]
    fn test_later_url_is_ignored() {
        let registry = ConnectionRegistry::in_memory();
        let first = registry.acquire("primary").unwrap();
        let second = registry.acquire("replica").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.url(), "primary");
    }

    #[test]
    fn test_release_then_acquire_creates_new_instance() {
        let registry = ConnectionRegistry::in_memory();
        let first = registry.acquire("primary").unwrap();

        registry.release();
        assert!(registry.current().is_none());

        let second = registry.acquire("replica").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_ne!(first.id(), second.id());
        assert_eq!(second.url(), "replica");
        assert!(!first.is_connected());
        assert!(second.is_connected());
    }

    #[test]
    fn test_release_is_idempotent() {
        let registry = ConnectionRegistry::in_memory();
        registry.release();
        assert!(!registry.is_present());

        registry.acquire("db").unwrap();
        registry.release();
        registry.release();
        assert!(!registry.is_present());
    }

    #[test]
    fn test_current_matches_acquired() {
        let registry = ConnectionRegistry::in_memory();
        let conn = registry.acquire("db").unwrap();
        let current = registry.current().unwrap();
        assert!(Arc::ptr_eq(&conn, &current));
    }
}
