use super::payment_method::PaymentMethod;
use serde::Serialize;
use serde_json::Value;

/// Result of checking caller-supplied payment data before any provider call.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Checks that `data` carries the fields the method tag requires.
///
/// Only `stripe_card`, `paypal` and `authorize_net` have rules; every other
/// tag, the wallet variants included, is reported as unsupported.
pub fn validate_payment_data(tag: &str, data: &Value) -> Validation {
    match tag.parse::<PaymentMethod>() {
        Ok(PaymentMethod::StripeCard) => {
            if !is_present(data, "paymentMethodId") {
                return Validation::invalid("Payment method ID is required");
            }
        }
        Ok(PaymentMethod::PayPal) => {
            if !is_present(data, "orderId") {
                return Validation::invalid("PayPal order ID is required");
            }
        }
        Ok(PaymentMethod::AuthorizeNet) => {
            let complete = ["cardNumber", "expirationDate", "cardCode"]
                .iter()
                .all(|field| is_present(data, field));
            if !complete {
                return Validation::invalid("Credit card information is incomplete");
            }
        }
        _ => return Validation::invalid("Unsupported payment method"),
    }

    Validation::ok()
}

/// A field counts as present when it holds a truthy value.
fn is_present(data: &Value, field: &str) -> bool {
    match data.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
