use crate::domain::payment::{
    Amount, CreditCardPayment, OrderDetails, PaymentMethod, PaymentRequest, PaymentType,
    UpiPayment,
};
use crate::error::{Error, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Builds payment methods from a type tag and validated inputs.
///
/// Keeps no state between calls.
pub struct PaymentFactory;

impl PaymentFactory {
    /// Validates the inputs and returns the payment variant named by `method`.
    ///
    /// Checks run in this order: amount, order details, type tag. The first
    /// failing check decides the error.
    ///
    /// # Arguments
    ///
    /// * `method` - `"upi"` or `"creditCard"` (`"card"` is accepted as an alias).
    /// * `amount` - Must be present and greater than zero.
    /// * `order_details` - Must be present.
    pub fn create(
        method: &str,
        amount: Option<Decimal>,
        order_details: Option<OrderDetails>,
    ) -> Result<PaymentMethod> {
        let amount = amount.ok_or(Error::InvalidAmount).and_then(Amount::new)?;
        let order_details = order_details.ok_or(Error::MissingOrderDetails)?;
        let payment_type: PaymentType = method.parse()?;

        debug!(method = %payment_type, amount = %amount, "Creating payment method");

        Ok(match payment_type {
            PaymentType::Upi => PaymentMethod::Upi(UpiPayment::new(amount, order_details)),
            PaymentType::CreditCard => {
                PaymentMethod::CreditCard(CreditCardPayment::new(amount, order_details))
            }
        })
    }

    /// Same as [`PaymentFactory::create`], taking the fields from a request.
    pub fn from_request(request: PaymentRequest) -> Result<PaymentMethod> {
        Self::create(&request.method, request.amount, request.order_details)
    }
}
