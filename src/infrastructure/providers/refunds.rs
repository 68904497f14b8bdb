use crate::domain::details::{PaymentDetails, RefundDetails, RefundStatus};
use crate::domain::payment_method::PaymentMethod;
use crate::domain::result::PaymentResult;
use crate::error::Result;
use crate::infrastructure::ids;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{info, instrument};

/// Simulated refunds, identical for every provider.
///
/// Refunds are accepted unconditionally and left in `processing`.
// TODO: model a completion transition once providers report refund settlement via webhook.
pub struct MockRefunds {
    latency: Duration,
}

impl MockRefunds {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[instrument(skip(self))]
    pub async fn refund(
        &self,
        method: PaymentMethod,
        transaction_id: &str,
        amount: Decimal,
    ) -> Result<PaymentResult> {
        tokio::time::sleep(self.latency).await;
        let refund_id = ids::refund_id();

        info!(
            provider = %method.provider(),
            transaction_id,
            %amount,
            refund_id = %refund_id,
            "Processing refund"
        );

        Ok(PaymentResult::approved(
            refund_id.clone(),
            PaymentDetails::Refund(RefundDetails {
                refund_id,
                amount,
                status: RefundStatus::Processing,
            }),
        ))
    }
}
