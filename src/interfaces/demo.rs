use crate::application::factory::PaymentFactory;
use crate::application::registry::ConnectionRegistry;
use crate::domain::payment::{OrderDetails, ProcessPayment};
use crate::error::Result;
use rust_decimal_macros::dec;
use serde_json::json;
use std::fmt;
use std::sync::Arc;

/// Lines produced by [`run`], in the order the steps happened.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoReport {
    lines: Vec<String>,
}

impl DemoReport {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// The order used by the payment half of the walkthrough.
pub fn sample_order() -> Result<OrderDetails> {
    OrderDetails::try_from(json!({
        "name": "Earphones ZC01",
        "category": "electronics",
        "subCategory": "Wearable Audio Device"
    }))
}

/// Walks through both patterns against `registry`.
///
/// Acquires the shared connection three times, checks they are one instance,
/// releases it, then builds and processes a UPI and a credit card payment.
/// `registry` is left without a live connection.
pub fn run(registry: &ConnectionRegistry, url: &str) -> Result<DemoReport> {
    let mut report = DemoReport::default();

    report.push("Shared connection");
    let first = registry.acquire(url)?;
    let second = registry.acquire(url)?;
    let third = registry.acquire(url)?;
    report.push(format!("Acquired 3 handles for {url}: {first}"));
    report.push(format!(
        "Same instance for all handles: {}",
        Arc::ptr_eq(&first, &second) && Arc::ptr_eq(&second, &third)
    ));

    let current = registry
        .current()
        .map_or("none".to_string(), |conn| conn.to_string());
    report.push(format!("Current before release: {current}"));

    registry.release();
    report.push(format!(
        "Current after release: {}",
        registry.current().map_or("none".to_string(), |conn| conn.to_string())
    ));

    report.push("Payment methods");
    let order = sample_order()?;

    let upi = PaymentFactory::create("upi", Some(dec!(100)), Some(order.clone()))?;
    report.push(upi.process("upiId@kotak")?.to_string());

    let card = PaymentFactory::create("creditCard", Some(dec!(100)), Some(order))?;
    report.push(card.process("22333113023")?.to_string());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_walkthrough() {
        let registry = ConnectionRegistry::in_memory();
        let report = run(&registry, "connectToDbUrl.com").unwrap();
        let lines = report.lines();

        assert!(lines.contains(&"Same instance for all handles: true".to_string()));
        assert!(lines.contains(&"Current after release: none".to_string()));
        assert!(lines.iter().any(|l| l.contains("using UPI id upiId@kotak is success.")));
        assert!(
            lines
                .iter()
                .any(|l| l.contains("using card number 22333113023 is success."))
        );
        assert!(!registry.is_present());
    }

    #[test]
    fn test_sample_order_fields() {
        let order = sample_order().unwrap();
        assert_eq!(order.get("category").unwrap(), "electronics");
    }
}
