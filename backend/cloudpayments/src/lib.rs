//! Typed models for the CloudPayments gateway's REST responses.
//!
//! Transport code hands the parsed JSON body of a gateway response to one of
//! the `from_value` constructors and gets back an immutable, fully-typed
//! model. The crate does no I/O of its own.

pub mod transformers;

pub use transformers::{GatewayResponse, Order, Secure3d, Subscription, Transaction};
