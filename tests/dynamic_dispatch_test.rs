use checkout_payments::application::checkout::{Checkout, CheckoutRequest};
use checkout_payments::domain::order::Order;
use checkout_payments::domain::ports::PaymentGatewayBox;
use checkout_payments::infrastructure::outcome::{FixedOutcome, SeededOutcome};
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;

mod common;

#[tokio::test]
async fn test_facade_as_trait_object_across_tasks() {
    let gateway: PaymentGatewayBox = Box::new(common::instant_facade(FixedOutcome::approve()));
    let checkout = Arc::new(Checkout::new(gateway));

    // Verify Send + Sync by spawning tasks
    let mut handles = Vec::new();
    for i in 0..20 {
        let checkout = checkout.clone();
        handles.push(tokio::spawn(async move {
            let request = CheckoutRequest {
                order: Order::new(format!("ord-{i}"), dec!(10)),
                method: "stripe_card".to_string(),
                data: json!({"paymentMethodId": format!("pm_{i}")}),
            };
            checkout.process(request).await
        }));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        let outcome = handle.await.unwrap();
        assert!(outcome.result.success());
        ids.insert(outcome.result.transaction_id().unwrap().to_string());
    }
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_seeded_outcomes_replay() {
    let run = |seed| async move {
        let checkout = Checkout::new(Box::new(common::instant_facade(SeededOutcome::new(seed))));
        let mut successes = Vec::new();
        for i in 0..100 {
            let request = CheckoutRequest {
                order: Order::new(format!("ord-{i}"), dec!(10)),
                method: "paypal".to_string(),
                data: json!({"orderId": format!("PAY-{i}")}),
            };
            successes.push(checkout.process(request).await.result.success());
        }
        successes
    };

    assert_eq!(run(42).await, run(42).await);
}
