use crate::application::checkout::CheckoutRequest;
use crate::domain::order::Order;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

/// One row of the orders file. Provider fields are optional per method.
#[derive(Debug, Deserialize)]
struct OrderRecord {
    order: String,
    total: Decimal,
    method: String,
    payment_method_id: Option<String>,
    paypal_order_id: Option<String>,
    card_number: Option<String>,
    expiration_date: Option<String>,
    card_code: Option<String>,
}

impl From<OrderRecord> for CheckoutRequest {
    fn from(record: OrderRecord) -> Self {
        let mut data = Map::new();
        let fields = [
            ("paymentMethodId", record.payment_method_id),
            ("orderId", record.paypal_order_id),
            ("cardNumber", record.card_number),
            ("expirationDate", record.expiration_date),
            ("cardCode", record.card_code),
        ];
        for (key, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                data.insert(key.to_string(), Value::String(value));
            }
        }

        CheckoutRequest {
            order: Order::new(record.order, record.total),
            method: record.method,
            data: Value::Object(data),
        }
    }
}

/// Reads checkout requests from a CSV source.
///
/// Whitespace is trimmed and trailing provider columns may be omitted.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and converts each row; malformed rows yield an error and
    /// do not stop the stream.
    pub fn requests(self) -> impl Iterator<Item = Result<CheckoutRequest>> {
        self.reader
            .into_deserialize::<OrderRecord>()
            .map(|result| result.map(CheckoutRequest::from).map_err(PaymentError::from))
    }
}
