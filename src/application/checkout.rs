use crate::domain::card::CardData;
use crate::domain::fees::calculate_processing_fee;
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::{PaymentGateway, PaymentGatewayBox};
use crate::domain::result::PaymentResult;
use crate::domain::validation::validate_payment_data;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{info, instrument, warn};

/// One order to pay, as submitted by the storefront.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub order: Order,
    /// Raw method tag; unknown tags are rejected by validation.
    pub method: String,
    /// Provider-specific fields (`paymentMethodId`, `orderId`, card fields).
    pub data: Value,
}

#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub order_id: String,
    pub method: String,
    pub result: PaymentResult,
    pub fee: Decimal,
}

/// Runs validate, create and confirm for a single order.
pub struct Checkout {
    gateway: PaymentGatewayBox,
}

impl Checkout {
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self, request), fields(order_id = %request.order.id, method = %request.method))]
    pub async fn process(&self, request: CheckoutRequest) -> CheckoutOutcome {
        let fee = calculate_processing_fee(request.order.total, &request.method);
        let result = self.pay(&request).await;

        if result.success() {
            info!(transaction_id = result.transaction_id(), "Payment approved");
        } else {
            warn!(error = result.error(), "Payment not completed");
        }

        CheckoutOutcome {
            order_id: request.order.id,
            method: request.method,
            result,
            fee,
        }
    }

    async fn pay(&self, request: &CheckoutRequest) -> PaymentResult {
        let validation = validate_payment_data(&request.method, &request.data);
        if !validation.valid {
            let error = validation
                .error
                .unwrap_or_else(|| "Invalid payment data".to_string());
            return PaymentResult::declined(error);
        }

        // Validation only passes for the three methods handled below.
        match request.method.parse::<PaymentMethod>() {
            Ok(PaymentMethod::StripeCard) => {
                let intent = self
                    .gateway
                    .create_stripe_payment_intent(&request.order)
                    .await;
                let intent_id = match intent.transaction_id() {
                    Some(id) if intent.success() => id.to_string(),
                    _ => return intent,
                };
                let payment_method_id = field(&request.data, "paymentMethodId");
                self.gateway
                    .process_stripe_payment(&intent_id, &payment_method_id)
                    .await
            }
            Ok(PaymentMethod::PayPal) => {
                let order_id = field(&request.data, "orderId");
                self.gateway.capture_paypal_payment(&order_id).await
            }
            Ok(PaymentMethod::AuthorizeNet) => match CardData::from_value(&request.data) {
                Some(card) => {
                    self.gateway
                        .process_authorize_net_payment(&request.order, &card)
                        .await
                }
                None => PaymentResult::declined("Credit card information is incomplete"),
            },
            _ => PaymentResult::declined("Unsupported payment method"),
        }
    }
}

fn field(data: &Value, name: &str) -> String {
    match data.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
