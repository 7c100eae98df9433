use payment_patterns::domain::connection::SharedConnection;
use payment_patterns::domain::payment::OrderDetails;
use payment_patterns::domain::ports::Connector;
use payment_patterns::error::{Error, Result};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub fn sample_order() -> OrderDetails {
    OrderDetails::try_from(json!({
        "name": "Earphones ZC01",
        "category": "electronics",
        "subCategory": "Wearable Audio Device"
    }))
    .expect("Sample order should be valid")
}

/// Connects like `InMemoryConnector` but counts how often it was asked to.
#[derive(Clone, Default)]
pub struct CountingConnector {
    pub calls: Arc<AtomicUsize>,
}

impl Connector for CountingConnector {
    fn connect(&self, url: &str) -> Result<SharedConnection> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SharedConnection::new(url, true))
    }
}

pub struct FailingConnector;

impl Connector for FailingConnector {
    fn connect(&self, url: &str) -> Result<SharedConnection> {
        Err(Error::Connection(format!("unreachable host: {url}")))
    }
}

/// Panics on the first `connect` and connects normally afterwards.
#[derive(Default)]
pub struct PanickingOnceConnector {
    panicked: AtomicBool,
}

impl Connector for PanickingOnceConnector {
    fn connect(&self, url: &str) -> Result<SharedConnection> {
        if !self.panicked.swap(true, Ordering::SeqCst) {
            panic!("driver crashed while connecting to {url}");
        }
        Ok(SharedConnection::new(url, true))
    }
}
