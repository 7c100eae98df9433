//! The process-wide connection registry.
//!
//! Created lazily on first access with `InMemoryConnector`. `release` is the
//! teardown: it clears the shared connection, and the next `acquire`
//! establishes a new one.

use super::registry::ConnectionRegistry;
use crate::domain::connection::SharedConnection;
use crate::error::Result;
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL_REGISTRY: Lazy<ConnectionRegistry> = Lazy::new(ConnectionRegistry::in_memory);

/// The registry behind the free functions of this module.
pub fn registry() -> &'static ConnectionRegistry {
    &GLOBAL_REGISTRY
}

/// See [`ConnectionRegistry::acquire`].
pub fn acquire(url: &str) -> Result<Arc<SharedConnection>> {
    registry().acquire(url)
}

/// See [`ConnectionRegistry::current`].
pub fn current() -> Option<Arc<SharedConnection>> {
    registry().current()
}

/// See [`ConnectionRegistry::release`].
pub fn release() {
    registry().release()
}
