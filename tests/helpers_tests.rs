use checkout_payments::domain::fees::{DEFAULT_FEE_RATE, calculate_processing_fee};
use checkout_payments::domain::payment_method::{PaymentMethod, payment_method_name};
use checkout_payments::domain::validation::validate_payment_data;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_every_tag_has_a_name() {
    for method in PaymentMethod::ALL {
        let name = payment_method_name(method.as_str());
        assert!(!name.is_empty());
        assert_eq!(name, method.display_name());
    }
    assert_eq!(payment_method_name("klarna"), "Unknown Payment Method");
}

#[test]
fn test_fee_matches_rate_for_many_amounts() {
    let amounts = (0..500).map(|cents| Decimal::new(cents * 137, 2));

    for amount in amounts {
        for method in PaymentMethod::ALL {
            let expected = (amount * method.fee_rate())
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            assert_eq!(calculate_processing_fee(amount, method.as_str()), expected);
        }

        let expected = (amount * DEFAULT_FEE_RATE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(calculate_processing_fee(amount, "unknown"), expected);
    }
}

#[test]
fn test_fee_rates() {
    assert_eq!(PaymentMethod::StripeCard.fee_rate(), dec!(0.029));
    assert_eq!(PaymentMethod::StripeApplePay.fee_rate(), dec!(0.029));
    assert_eq!(PaymentMethod::PayPal.fee_rate(), dec!(0.031));
    assert_eq!(PaymentMethod::AuthorizeNet.fee_rate(), dec!(0.025));
    assert_eq!(DEFAULT_FEE_RATE, dec!(0.03));
}

#[test]
fn test_validation_table() {
    let cases = [
        ("stripe_card", json!({}), Some("Payment method ID is required")),
        ("stripe_card", json!({"paymentMethodId": "pm_1"}), None),
        ("paypal", json!({}), Some("PayPal order ID is required")),
        ("paypal", json!({"orderId": "PAY-1"}), None),
        (
            "authorize_net",
            json!({"cardNumber": "4111111111111111", "expirationDate": "12/30"}),
            Some("Credit card information is incomplete"),
        ),
        (
            "authorize_net",
            json!({"cardNumber": "4111111111111111", "expirationDate": "12/30", "cardCode": "123"}),
            None,
        ),
        ("cash_on_delivery", json!({}), Some("Unsupported payment method")),
    ];

    for (tag, data, expected_error) in cases {
        let result = validate_payment_data(tag, &data);
        assert_eq!(result.valid, expected_error.is_none(), "{tag} {data}");
        assert_eq!(result.error.as_deref(), expected_error, "{tag} {data}");
    }
}
