use super::connection::SharedConnection;
use crate::error::Result;

/// Establishes the connection a registry shares.
///
/// Called at most once per Absent→Present transition, while the registry
/// holds its slot lock.
pub trait Connector: Send + Sync {
    fn connect(&self, url: &str) -> Result<SharedConnection>;
}

pub type ConnectorBox = Box<dyn Connector>;
