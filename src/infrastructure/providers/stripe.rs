use crate::config::StripeConfig;
use crate::domain::details::{
    Charge, ChargeList, IntentStatus, PaymentDetails, StripeConfirmation, StripePaymentIntent,
};
use crate::domain::order::Order;
use crate::domain::ports::{Outcome, OutcomeProviderRef};
use crate::domain::result::PaymentResult;
use crate::error::Result;
use crate::infrastructure::ids;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const APPROVAL_PROBABILITY: f64 = 0.90;
pub const DECLINE_MESSAGE: &str = "Payment declined by card issuer";

/// Simulated Stripe: payment intents confirmed with a payment method reference.
pub struct MockStripe {
    config: StripeConfig,
    confirm_latency: Duration,
    outcome: OutcomeProviderRef,
}

impl MockStripe {
    pub fn new(config: StripeConfig, confirm_latency: Duration, outcome: OutcomeProviderRef) -> Self {
        Self {
            config,
            confirm_latency,
            outcome,
        }
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn create_payment_intent(&self, order: &Order) -> Result<PaymentResult> {
        let id = ids::stripe_intent_id();
        let intent = StripePaymentIntent {
            client_secret: ids::stripe_client_secret(),
            id: id.clone(),
            amount: order.minor_units()?,
            currency: "usd".to_string(),
            status: IntentStatus::RequiresPaymentMethod,
        };

        info!(
            payment_intent = %intent.id,
            environment = ?self.config.environment(),
            "Created Stripe payment intent"
        );
        Ok(PaymentResult::approved(
            id,
            PaymentDetails::StripePaymentIntent(intent),
        ))
    }

    #[instrument(skip(self))]
    pub async fn confirm_payment(
        &self,
        payment_intent_id: &str,
        payment_method_id: &str,
    ) -> Result<PaymentResult> {
        tokio::time::sleep(self.confirm_latency).await;
        debug!("Processing payment with method");

        match self.outcome.decide(APPROVAL_PROBABILITY) {
            Outcome::Approved => {
                let confirmation = StripeConfirmation {
                    id: payment_intent_id.to_string(),
                    status: IntentStatus::Succeeded,
                    charges: ChargeList {
                        data: vec![Charge {
                            id: ids::stripe_charge_id(),
                            paid: true,
                            status: IntentStatus::Succeeded,
                        }],
                    },
                };
                Ok(PaymentResult::approved(
                    payment_intent_id,
                    PaymentDetails::StripeConfirmation(confirmation),
                ))
            }
            Outcome::Declined => Ok(PaymentResult::declined(DECLINE_MESSAGE)),
        }
    }
}
