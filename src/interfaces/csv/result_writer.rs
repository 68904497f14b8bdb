use crate::application::checkout::CheckoutOutcome;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    order: &'a str,
    method: &'a str,
    success: bool,
    transaction_id: Option<&'a str>,
    fee: Decimal,
    error: Option<&'a str>,
}

impl<'a> From<&'a CheckoutOutcome> for OutcomeRecord<'a> {
    fn from(outcome: &'a CheckoutOutcome) -> Self {
        Self {
            order: &outcome.order_id,
            method: &outcome.method,
            success: outcome.result.success(),
            transaction_id: outcome.result.transaction_id(),
            fee: outcome.fee,
            error: outcome.result.error(),
        }
    }
}

/// Writes checkout outcomes as CSV, one row per order.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, outcome: &CheckoutOutcome) -> Result<()> {
        self.writer.serialize(OutcomeRecord::from(outcome))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::PaymentResult;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writes_header_and_rows() {
        let outcome = CheckoutOutcome {
            order_id: "ord-1".to_string(),
            method: "paypal".to_string(),
            result: PaymentResult::declined("PayPal order ID is required"),
            fee: dec!(3.10),
        };

        let mut buffer = Vec::new();
        {
            let mut writer = ResultWriter::new(&mut buffer);
            writer.write(&outcome).unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "order,method,success,transaction_id,fee,error\nord-1,paypal,false,,3.10,PayPal order ID is required\n"
        );
    }
}
