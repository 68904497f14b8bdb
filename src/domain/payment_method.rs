use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label returned for tags outside the known set.
pub const UNKNOWN_METHOD_NAME: &str = "Unknown Payment Method";

/// The provider and flow a payment goes through.
///
/// Selected by the caller per transaction and never inferred.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    StripeCard,
    StripeApplePay,
    StripeGooglePay,
    #[serde(rename = "paypal")]
    PayPal,
    AuthorizeNet,
}

/// The processor behind a [`PaymentMethod`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Stripe,
    #[serde(rename = "paypal")]
    PayPal,
    AuthorizeNet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::StripeCard,
        PaymentMethod::StripeApplePay,
        PaymentMethod::StripeGooglePay,
        PaymentMethod::PayPal,
        PaymentMethod::AuthorizeNet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::StripeCard => "stripe_card",
            PaymentMethod::StripeApplePay => "stripe_apple_pay",
            PaymentMethod::StripeGooglePay => "stripe_google_pay",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::AuthorizeNet => "authorize_net",
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            PaymentMethod::StripeCard
            | PaymentMethod::StripeApplePay
            | PaymentMethod::StripeGooglePay => Provider::Stripe,
            PaymentMethod::PayPal => Provider::PayPal,
            PaymentMethod::AuthorizeNet => Provider::AuthorizeNet,
        }
    }

    /// Human-readable name shown at checkout.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::StripeCard => "Credit/Debit Card",
            PaymentMethod::StripeApplePay => "Apple Pay",
            PaymentMethod::StripeGooglePay => "Google Pay",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::AuthorizeNet => "Credit Card (Authorize.Net)",
        }
    }

    /// Processing fee rate charged by the provider, as a fraction of the amount.
    pub fn fee_rate(&self) -> Decimal {
        match self.provider() {
            Provider::Stripe => dec!(0.029),
            Provider::PayPal => dec!(0.031),
            Provider::AuthorizeNet => dec!(0.025),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Stripe => "stripe",
            Provider::PayPal => "paypal",
            Provider::AuthorizeNet => "authorize_net",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("unknown payment method '{0}'")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

/// Display name for a raw tag, falling back to [`UNKNOWN_METHOD_NAME`].
pub fn payment_method_name(tag: &str) -> &'static str {
    tag.parse::<PaymentMethod>()
        .map(|method| method.display_name())
        .unwrap_or(UNKNOWN_METHOD_NAME)
}
