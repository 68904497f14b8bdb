use crate::config::Settings;
use crate::domain::card::CardData;
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::{OutcomeProviderRef, PaymentGateway};
use crate::domain::result::PaymentResult;
use crate::error::Result;
use crate::infrastructure::outcome::RandomOutcome;
use crate::infrastructure::providers::authorize_net::MockAuthorizeNet;
use crate::infrastructure::providers::paypal::MockPayPal;
use crate::infrastructure::providers::refunds::MockRefunds;
use crate::infrastructure::providers::stripe::MockStripe;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// One entry point for every provider, whichever one an order selects.
///
/// `PaymentFacade` owns a simulated back end per provider. Errors raised
/// inside a provider are logged and turned into a declined [`PaymentResult`],
/// so no operation ever fails structurally.
pub struct PaymentFacade {
    stripe: MockStripe,
    paypal: MockPayPal,
    authorize_net: MockAuthorizeNet,
    refunds: MockRefunds,
}

impl PaymentFacade {
    /// Creates a facade whose providers resolve through `outcome`.
    ///
    /// # Arguments
    ///
    /// * `settings` - Provider credentials and simulated latency.
    /// * `outcome` - Decides approvals for confirm, capture and authorize calls.
    pub fn new(settings: Settings, outcome: OutcomeProviderRef) -> Self {
        let Settings {
            stripe,
            paypal,
            authorize_net,
            latency,
        } = settings;

        Self {
            stripe: MockStripe::new(stripe, latency.stripe_confirm, outcome.clone()),
            paypal: MockPayPal::new(paypal, latency.paypal_capture, outcome.clone()),
            authorize_net: MockAuthorizeNet::new(
                authorize_net,
                latency.authorize_net_authorize,
                outcome,
            ),
            refunds: MockRefunds::new(latency.refund),
        }
    }

    /// Creates a facade with unseeded random outcomes.
    pub fn with_random_outcomes(settings: Settings) -> Self {
        Self::new(settings, Arc::new(RandomOutcome))
    }
}

fn settle(result: Result<PaymentResult>, failure: &str) -> PaymentResult {
    result.unwrap_or_else(|e| {
        error!(error = %e, "{failure}");
        PaymentResult::declined(failure)
    })
}

#[async_trait]
impl PaymentGateway for PaymentFacade {
    async fn create_stripe_payment_intent(&self, order: &Order) -> PaymentResult {
        settle(
            self.stripe.create_payment_intent(order),
            "Failed to create payment intent",
        )
    }

    async fn process_stripe_payment(
        &self,
        payment_intent_id: &str,
        payment_method_id: &str,
    ) -> PaymentResult {
        settle(
            self.stripe
                .confirm_payment(payment_intent_id, payment_method_id)
                .await,
            "Payment processing failed",
        )
    }

    async fn create_paypal_order(&self, order: &Order) -> PaymentResult {
        settle(
            self.paypal.create_order(order),
            "Failed to create PayPal order",
        )
    }

    async fn capture_paypal_payment(&self, order_id: &str) -> PaymentResult {
        settle(
            self.paypal.capture(order_id).await,
            "Payment capture failed",
        )
    }

    async fn process_authorize_net_payment(
        &self,
        order: &Order,
        card: &CardData,
    ) -> PaymentResult {
        settle(
            self.authorize_net.authorize(order, card).await,
            "Payment processing failed",
        )
    }

    async fn process_refund(
        &self,
        method: PaymentMethod,
        transaction_id: &str,
        amount: Decimal,
    ) -> PaymentResult {
        settle(
            self.refunds.refund(method, transaction_id, amount).await,
            "Refund processing failed",
        )
    }

    /// Accepts any non-empty payload carrying a non-empty signature.
    ///
    /// No signature is checked. A real verifier must recompute the provider's
    /// HMAC over the raw payload bytes with the webhook secret and reject
    /// mismatches, stale timestamps and malformed headers.
    #[instrument(skip(self, payload, signature))]
    fn verify_webhook(&self, payload: &str, signature: &str, method: PaymentMethod) -> bool {
        let preview: String = signature.chars().take(20).collect();
        debug!(signature = %preview, "Verifying webhook signature");

        !signature.is_empty() && !payload.is_empty()
    }
}
