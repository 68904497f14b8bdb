//! Provider-shaped response payloads carried in [`PaymentResult`](super::result::PaymentResult).
//!
//! Each variant mirrors what the corresponding processor returns, so the shape
//! is statically known per branch while the outer result stays uniform.
//! Callers should not expect the fields to line up across providers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentDetails {
    StripePaymentIntent(StripePaymentIntent),
    StripeConfirmation(StripeConfirmation),
    #[serde(rename = "paypal_order")]
    PayPalOrder(PayPalOrder),
    AuthorizeNet(AuthorizeNetResponse),
    Refund(RefundDetails),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    RequiresPaymentMethod,
    Succeeded,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StripePaymentIntent {
    pub id: String,
    pub client_secret: String,
    /// Amount in cents.
    pub amount: i64,
    pub currency: String,
    pub status: IntentStatus,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StripeConfirmation {
    pub id: String,
    pub status: IntentStatus,
    pub charges: ChargeList,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ChargeList {
    pub data: Vec<Charge>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Charge {
    pub id: String,
    pub paid: bool,
    pub status: IntentStatus,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayPalStatus {
    Created,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PayPalOrder {
    pub id: String,
    pub status: PayPalStatus,
    pub purchase_units: Vec<PurchaseUnit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct PurchaseUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Payments>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Money {
    pub currency_code: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payments {
    pub captures: Vec<Capture>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Capture {
    pub id: String,
    pub status: PayPalStatus,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeNetResponse {
    pub transaction_response: TransactionResponse,
}

/// Authorize.Net response codes: "1" approved, "2" declined.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum ResponseCode {
    #[serde(rename = "1")]
    Approved,
    #[serde(rename = "2")]
    Declined,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub response_code: ResponseCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_id: Option<String>,
    pub messages: Vec<ResponseMessage>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ResponseMessage {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    /// The only state the simulated refund reaches. There is no completion feed.
    Processing,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RefundDetails {
    pub refund_id: String,
    pub amount: Decimal,
    pub status: RefundStatus,
}
