use crate::domain::connection::SharedConnection;
use crate::domain::ports::Connector;
use crate::error::Result;

/// A connector that performs no I/O.
///
/// Every call succeeds and yields a connection marked as connected.
/// Used by the process-wide registry, the demo and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct InMemoryConnector;

impl InMemoryConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connector for InMemoryConnector {
    fn connect(&self, url: &str) -> Result<SharedConnection> {
        Ok(SharedConnection::new(url, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_connector() {
        let connector = InMemoryConnector::new();
        let conn = connector.connect("connectToDbUrl.com").unwrap();
        assert!(conn.is_connected());
        assert_eq!(conn.url(), "connectToDbUrl.com");
    }

    #[test]
    fn test_empty_url_accepted() {
        let conn = InMemoryConnector.connect("").unwrap();
        assert_eq!(conn.url(), "");
    }
}
