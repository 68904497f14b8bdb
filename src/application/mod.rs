//! Application layer: the payment facade and the checkout pipeline built on it.
//!
//! `PaymentFacade` is the primary entry point. It implements the
//! `PaymentGateway` port, which `Checkout` depends on so the pipeline can run
//! against any gateway.

pub mod checkout;
pub mod facade;
