use crate::config::AuthorizeNetConfig;
use crate::domain::card::CardData;
use crate::domain::details::{
    AuthorizeNetResponse, PaymentDetails, ResponseCode, ResponseMessage, TransactionResponse,
};
use crate::domain::order::Order;
use crate::domain::ports::{Outcome, OutcomeProviderRef};
use crate::domain::result::PaymentResult;
use crate::error::Result;
use crate::infrastructure::ids;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const APPROVAL_PROBABILITY: f64 = 0.92;
pub const DECLINE_MESSAGE: &str = "Transaction declined";

/// Simulated Authorize.Net: authorizes in one call from raw card data.
pub struct MockAuthorizeNet {
    config: AuthorizeNetConfig,
    authorize_latency: Duration,
    outcome: OutcomeProviderRef,
}

impl MockAuthorizeNet {
    pub fn new(
        config: AuthorizeNetConfig,
        authorize_latency: Duration,
        outcome: OutcomeProviderRef,
    ) -> Self {
        Self {
            config,
            authorize_latency,
            outcome,
        }
    }

    #[instrument(skip(self, order, card), fields(order_id = %order.id))]
    pub async fn authorize(&self, order: &Order, card: &CardData) -> Result<PaymentResult> {
        tokio::time::sleep(self.authorize_latency).await;
        // Authorize.Net wants the amount as a decimal string; reject what it would.
        let amount = order.decimal_string()?;
        debug!(?card, %amount, environment = ?self.config.environment, "Payment data received");

        match self.outcome.decide(APPROVAL_PROBABILITY) {
            Outcome::Approved => {
                let transaction_id = ids::authorize_net_transaction_id();
                info!(transaction_id = %transaction_id, "Authorize.Net transaction approved");
                let response = TransactionResponse {
                    response_code: ResponseCode::Approved,
                    auth_code: Some(ids::authorize_net_auth_code()),
                    trans_id: Some(transaction_id.clone()),
                    messages: vec![ResponseMessage {
                        code: "1".to_string(),
                        description: "This transaction has been approved.".to_string(),
                    }],
                };
                Ok(PaymentResult::approved(
                    transaction_id,
                    PaymentDetails::AuthorizeNet(AuthorizeNetResponse {
                        transaction_response: response,
                    }),
                ))
            }
            Outcome::Declined => {
                let response = TransactionResponse {
                    response_code: ResponseCode::Declined,
                    auth_code: None,
                    trans_id: None,
                    messages: vec![ResponseMessage {
                        code: "2".to_string(),
                        description: "This transaction has been declined.".to_string(),
                    }],
                };
                Ok(PaymentResult::declined_with_details(
                    DECLINE_MESSAGE,
                    PaymentDetails::AuthorizeNet(AuthorizeNetResponse {
                        transaction_response: response,
                    }),
                ))
            }
        }
    }
}
