//! Domain types: the shared connection entity, the payment model and the
//! ports the application layer depends on.

pub mod connection;
pub mod payment;
pub mod ports;
