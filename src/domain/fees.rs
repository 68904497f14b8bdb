use super::payment_method::PaymentMethod;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rate applied when the tag is not a known payment method.
pub const DEFAULT_FEE_RATE: Decimal = dec!(0.03);

/// Processing fee for `amount` under the given method tag, rounded to cents.
///
/// Midpoints round away from zero, so a fee of 0.145 becomes 0.15.
pub fn calculate_processing_fee(amount: Decimal, tag: &str) -> Decimal {
    let rate = tag
        .parse::<PaymentMethod>()
        .map(|method| method.fee_rate())
        .unwrap_or(DEFAULT_FEE_RATE);
    (amount * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
