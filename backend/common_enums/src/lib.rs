//! Code tables for values the CloudPayments gateway reports by name or
//! numeric code.

pub mod enums;

pub use enums::{Currency, ReasonCode, SubscriptionStatus, TransactionStatus};
