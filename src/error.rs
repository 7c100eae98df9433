use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Order details are required")]
    MissingOrderDetails,
    #[error("Invalid payment type: {0}")]
    UnsupportedPaymentType(String),
    #[error("Payment identifier is required")]
    MissingIdentifier,
    #[error("Connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
