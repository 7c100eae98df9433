use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Represents a positive monetary amount for a payment.
///
/// Wraps `rust_decimal::Decimal` so that zero, negative and non-finite
/// amounts can never reach a payment variant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidAmount);
        }
        let decimal = Decimal::try_from(value).map_err(|_| Error::InvalidAmount)?;
        Self::new(decimal)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

/// Free-form description of the order being paid for.
///
/// Always a non-empty JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct OrderDetails(Map<String, Value>);

impl OrderDetails {
    pub fn new(fields: Map<String, Value>) -> Result<Self> {
        if fields.is_empty() {
            Err(Error::MissingOrderDetails)
        } else {
            Ok(Self(fields))
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl TryFrom<Value> for OrderDetails {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Self::new(fields),
            _ => Err(Error::MissingOrderDetails),
        }
    }
}

impl From<OrderDetails> for Value {
    fn from(details: OrderDetails) -> Self {
        Value::Object(details.0)
    }
}

impl fmt::Display for OrderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// The closed set of payment variants the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "creditCard", alias = "card")]
    CreditCard,
    #[serde(rename = "upi")]
    Upi,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::CreditCard => "creditCard",
            PaymentType::Upi => "upi",
        }
    }
}

impl FromStr for PaymentType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "creditCard" | "card" => Ok(PaymentType::CreditCard),
            "upi" => Ok(PaymentType::Upi),
            other => Err(Error::UnsupportedPaymentType(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated input for `PaymentFactory::from_request`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub method: String,
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_order_details")]
    pub order_details: Option<OrderDetails>,
}

// Empty or non-object details are treated as absent so the factory reports
// `MissingOrderDetails` instead of a deserialization failure.
fn deserialize_order_details<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<OrderDetails>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| OrderDetails::try_from(v).ok()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
}

/// What a processed payment reports back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub method: PaymentType,
    pub amount: Amount,
    pub order_details: OrderDetails,
    pub identifier: String,
    pub status: PaymentStatus,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.method {
            PaymentType::CreditCard => write!(
                f,
                "Payment for {} for order {} using card number {} is success.",
                self.amount, self.order_details, self.identifier
            ),
            PaymentType::Upi => write!(
                f,
                "Payment for {} for the order {} using UPI id {} is success.",
                self.amount, self.order_details, self.identifier
            ),
        }
    }
}

/// Capability shared by every payment variant.
pub trait ProcessPayment {
    /// Completes the payment with the variant-specific credential.
    fn process(&self, identifier: &str) -> Result<PaymentReceipt>;
}

fn receipt(
    method: PaymentType,
    amount: Amount,
    order_details: &OrderDetails,
    identifier: &str,
) -> Result<PaymentReceipt> {
    if identifier.trim().is_empty() {
        return Err(Error::MissingIdentifier);
    }
    tracing::info!(
        method = %method,
        amount = %amount,
        "Payment processed"
    );
    Ok(PaymentReceipt {
        method,
        amount,
        order_details: order_details.clone(),
        identifier: identifier.to_string(),
        status: PaymentStatus::Success,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreditCardPayment {
    pub amount: Amount,
    pub order_details: OrderDetails,
}

impl CreditCardPayment {
    pub fn new(amount: Amount, order_details: OrderDetails) -> Self {
        Self {
            amount,
            order_details,
        }
    }
}

impl ProcessPayment for CreditCardPayment {
    /// `identifier` is the card number.
    fn process(&self, identifier: &str) -> Result<PaymentReceipt> {
        receipt(
            PaymentType::CreditCard,
            self.amount,
            &self.order_details,
            identifier,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpiPayment {
    pub amount: Amount,
    pub order_details: OrderDetails,
}

impl UpiPayment {
    pub fn new(amount: Amount, order_details: OrderDetails) -> Self {
        Self {
            amount,
            order_details,
        }
    }
}

impl ProcessPayment for UpiPayment {
    /// `identifier` is the UPI handle, e.g. `name@bank`.
    fn process(&self, identifier: &str) -> Result<PaymentReceipt> {
        receipt(PaymentType::Upi, self.amount, &self.order_details, identifier)
    }
}

/// A payment ready to be processed. There is no base variant.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethod {
    CreditCard(CreditCardPayment),
    Upi(UpiPayment),
}

impl PaymentMethod {
    pub fn payment_type(&self) -> PaymentType {
        match self {
            PaymentMethod::CreditCard(_) => PaymentType::CreditCard,
            PaymentMethod::Upi(_) => PaymentType::Upi,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            PaymentMethod::CreditCard(p) => p.amount,
            PaymentMethod::Upi(p) => p.amount,
        }
    }

    pub fn order_details(&self) -> &OrderDetails {
        match self {
            PaymentMethod::CreditCard(p) => &p.order_details,
            PaymentMethod::Upi(p) => &p.order_details,
        }
    }
}

impl ProcessPayment for PaymentMethod {
    fn process(&self, identifier: &str) -> Result<PaymentReceipt> {
        match self {
            PaymentMethod::CreditCard(p) => p.process(identifier),
            PaymentMethod::Upi(p) => p.process(identifier),
        }
    }
}
