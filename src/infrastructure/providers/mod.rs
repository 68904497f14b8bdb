//! Simulated provider back ends.
//!
//! Each stands in for an authenticated API client. Replacing one with a real
//! integration must keep its inputs and the shape of the [`PaymentResult`]
//! it returns.
//!
//! [`PaymentResult`]: crate::domain::result::PaymentResult

pub mod authorize_net;
pub mod paypal;
pub mod refunds;
pub mod stripe;
