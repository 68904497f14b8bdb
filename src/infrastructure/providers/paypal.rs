use crate::config::PayPalConfig;
use crate::domain::details::{
    Capture, Link, Money, PayPalOrder, PayPalStatus, PaymentDetails, Payments, PurchaseUnit,
};
use crate::domain::order::Order;
use crate::domain::ports::{Outcome, OutcomeProviderRef};
use crate::domain::result::PaymentResult;
use crate::error::Result;
use crate::infrastructure::ids;
use std::time::Duration;
use tracing::{info, instrument};

pub const APPROVAL_PROBABILITY: f64 = 0.95;
pub const DECLINE_MESSAGE: &str = "PayPal payment could not be captured";

/// Simulated PayPal: orders the buyer approves on PayPal, captured afterwards.
pub struct MockPayPal {
    config: PayPalConfig,
    capture_latency: Duration,
    outcome: OutcomeProviderRef,
}

impl MockPayPal {
    pub fn new(config: PayPalConfig, capture_latency: Duration, outcome: OutcomeProviderRef) -> Self {
        Self {
            config,
            capture_latency,
            outcome,
        }
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn create_order(&self, order: &Order) -> Result<PaymentResult> {
        let id = ids::paypal_order_id();
        let paypal_order = PayPalOrder {
            id: id.clone(),
            status: PayPalStatus::Created,
            purchase_units: vec![PurchaseUnit {
                amount: Some(Money {
                    currency_code: "USD".to_string(),
                    value: order.decimal_string()?,
                }),
                payments: None,
            }],
            links: vec![Link {
                href: format!("{}?token={}", self.config.checkout_url(), id),
                rel: "approve".to_string(),
                method: "GET".to_string(),
            }],
        };

        info!(paypal_order = %paypal_order.id, "Created PayPal order");
        Ok(PaymentResult::approved(
            id,
            PaymentDetails::PayPalOrder(paypal_order),
        ))
    }

    #[instrument(skip(self))]
    pub async fn capture(&self, order_id: &str) -> Result<PaymentResult> {
        tokio::time::sleep(self.capture_latency).await;

        match self.outcome.decide(APPROVAL_PROBABILITY) {
            Outcome::Approved => {
                let captured = PayPalOrder {
                    id: order_id.to_string(),
                    status: PayPalStatus::Completed,
                    purchase_units: vec![PurchaseUnit {
                        amount: None,
                        payments: Some(Payments {
                            captures: vec![Capture {
                                id: ids::paypal_capture_id(),
                                status: PayPalStatus::Completed,
                            }],
                        }),
                    }],
                    links: Vec::new(),
                };
                Ok(PaymentResult::approved(
                    order_id,
                    PaymentDetails::PayPalOrder(captured),
                ))
            }
            Outcome::Declined => Ok(PaymentResult::declined(DECLINE_MESSAGE)),
        }
    }
}
