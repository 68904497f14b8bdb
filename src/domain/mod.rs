//! Domain model: payment methods, orders, the uniform result contract and the
//! pure helpers that need no provider.

pub mod card;
pub mod details;
pub mod fees;
pub mod order;
pub mod payment_method;
pub mod ports;
pub mod result;
pub mod validation;
