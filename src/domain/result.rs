use super::details::PaymentDetails;
use serde::Serialize;

/// The uniform outcome of every provider operation.
///
/// Built only through the constructors below, so an approved result always
/// carries a transaction id and a declined one always carries an error.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<PaymentDetails>,
}

impl PaymentResult {
    pub fn approved(transaction_id: impl Into<String>, details: PaymentDetails) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            error: None,
            details: Some(details),
        }
    }

    pub fn declined(error: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            error: Some(error.into()),
            details: None,
        }
    }

    /// A decline reported structurally, with the provider's response attached.
    pub fn declined_with_details(error: impl Into<String>, details: PaymentDetails) -> Self {
        Self {
            details: Some(details),
            ..Self::declined(error)
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn details(&self) -> Option<&PaymentDetails> {
        self.details.as_ref()
    }
}
