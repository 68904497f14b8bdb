#![allow(dead_code)]

use checkout_payments::application::facade::PaymentFacade;
use checkout_payments::config::{LatencyProfile, Settings};
use checkout_payments::domain::card::CardData;
use checkout_payments::domain::ports::OutcomeProvider;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub const ORDERS_HEADER: &str =
    "order,total,method,payment_method_id,paypal_order_id,card_number,expiration_date,card_code";

/// A facade with no simulated latency.
pub fn instant_facade(outcome: impl OutcomeProvider + 'static) -> PaymentFacade {
    let settings = Settings {
        latency: LatencyProfile::instant(),
        ..Settings::default()
    };
    PaymentFacade::new(settings, Arc::new(outcome))
}

/// A facade with the default provider latency.
pub fn default_facade(outcome: impl OutcomeProvider + 'static) -> PaymentFacade {
    PaymentFacade::new(Settings::default(), Arc::new(outcome))
}

pub fn test_card() -> CardData {
    CardData::new("4111111111111111", "12/30", "123")
}

/// Writes an orders file with the standard header followed by `rows`.
pub fn orders_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{ORDERS_HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
