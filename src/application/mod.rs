//! Application layer: the shared connection registry and the payment factory.
//!
//! The two components are independent. `registry` owns the at-most-one
//! connection slot, `global` exposes a process-wide instance of it, and
//! `factory` turns validated inputs into payment variants.

pub mod factory;
pub mod global;
pub mod registry;
