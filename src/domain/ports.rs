use super::card::CardData;
use super::order::Order;
use super::payment_method::PaymentMethod;
use super::result::PaymentResult;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// How a simulated provider resolved a request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Approved,
    Declined,
}

/// Decides whether a provider approves a request.
///
/// The mock providers never pick their own outcome; they ask this port with
/// their approval probability so tests can substitute deterministic fakes.
pub trait OutcomeProvider: Send + Sync {
    fn decide(&self, approval_probability: f64) -> Outcome;
}

pub type OutcomeProviderRef = Arc<dyn OutcomeProvider>;

/// The operations a checkout can ask of the payment layer.
///
/// Every operation reports failure through [`PaymentResult`] rather than an
/// error, so implementations must not panic or propagate.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_stripe_payment_intent(&self, order: &Order) -> PaymentResult;
    async fn process_stripe_payment(
        &self,
        payment_intent_id: &str,
        payment_method_id: &str,
    ) -> PaymentResult;
    async fn create_paypal_order(&self, order: &Order) -> PaymentResult;
    async fn capture_paypal_payment(&self, order_id: &str) -> PaymentResult;
    async fn process_authorize_net_payment(&self, order: &Order, card: &CardData)
    -> PaymentResult;
    async fn process_refund(
        &self,
        method: PaymentMethod,
        transaction_id: &str,
        amount: Decimal,
    ) -> PaymentResult;
    fn verify_webhook(&self, payload: &str, signature: &str, method: PaymentMethod) -> bool;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
