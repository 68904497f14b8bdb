//! Identifier fabrication for the simulated providers.
//!
//! Every id embeds the current millisecond plus a three-digit rolling sequence
//! and a random base-36 token, so ids generated in the same millisecond still
//! differ.

use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Milliseconds since the epoch followed by the rolling sequence.
pub fn stamp() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("{millis}{seq:03}")
}

/// Random lowercase base-36 token of `len` characters.
pub fn token(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

pub fn stripe_intent_id() -> String {
    format!("pi_{}_{}", stamp(), token(8))
}

/// Client secret handed to the browser: `pi_<stamp>_secret_<token>`.
///
/// Carries its own stamp, not the intent id's.
pub fn stripe_client_secret() -> String {
    format!("pi_{}_secret_{}", stamp(), token(8))
}

pub fn stripe_charge_id() -> String {
    format!("ch_{}", stamp())
}

pub fn paypal_order_id() -> String {
    format!("PAY-{}{}", stamp(), token(6).to_uppercase())
}

pub fn paypal_capture_id() -> String {
    format!("CAP-{}", stamp())
}

pub fn authorize_net_transaction_id() -> String {
    format!("AUTH-{}-{}", stamp(), token(6).to_uppercase())
}

/// "AUTH" followed by the last six digits of the current millisecond.
pub fn authorize_net_auth_code() -> String {
    let millis = chrono::Utc::now().timestamp_millis().to_string();
    let start = millis.len().saturating_sub(6);
    format!("AUTH{}", &millis[start..])
}

pub fn refund_id() -> String {
    format!("ref_{}_{}", stamp(), token(8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_alphabet_and_length() {
        let t = token(8);
        assert_eq!(t.len(), 8);
        assert!(t.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_id_prefixes() {
        assert!(stripe_intent_id().starts_with("pi_"));
        assert!(stripe_charge_id().starts_with("ch_"));
        assert!(paypal_order_id().starts_with("PAY-"));
        assert!(paypal_capture_id().starts_with("CAP-"));
        assert!(authorize_net_transaction_id().starts_with("AUTH-"));
        assert!(refund_id().starts_with("ref_"));

    }

    #[test]
    fn test_client_secret_shape() {
        let secret = stripe_client_secret();
        let (head, tail) = secret.split_once("_secret_").unwrap();
        let stamp = head.strip_prefix("pi_").unwrap();
        assert!(stamp.len() > 3);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(tail.len(), 8);
        assert!(tail.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_auth_code_shape() {
        let code = authorize_net_auth_code();
        assert_eq!(code.len(), 10);
        assert!(code[4..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_charge_ids_unique_within_same_millisecond() {
        // Charge ids carry no random token, so uniqueness rests on the sequence.
        let ids: HashSet<String> = (0..500).map(|_| stripe_charge_id()).collect();
        assert_eq!(ids.len(), 500);
    }
}
