use crate::domain::ports::{Outcome, OutcomeProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Unseeded randomness; every call is independent and not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOutcome;

impl OutcomeProvider for RandomOutcome {
    fn decide(&self, approval_probability: f64) -> Outcome {
        approve_if(rand::thread_rng().gen_bool(clamp(approval_probability)))
    }
}

/// Reproducible randomness from a fixed seed.
pub struct SeededOutcome {
    rng: Mutex<StdRng>,
}

impl SeededOutcome {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OutcomeProvider for SeededOutcome {
    fn decide(&self, approval_probability: f64) -> Outcome {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        approve_if(rng.gen_bool(clamp(approval_probability)))
    }
}

/// Always resolves the same way, whatever the probability.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub Outcome);

impl FixedOutcome {
    pub fn approve() -> Self {
        Self(Outcome::Approved)
    }

    pub fn decline() -> Self {
        Self(Outcome::Declined)
    }
}

impl OutcomeProvider for FixedOutcome {
    fn decide(&self, _approval_probability: f64) -> Outcome {
        self.0
    }
}

fn approve_if(approved: bool) -> Outcome {
    if approved {
        Outcome::Approved
    } else {
        Outcome::Declined
    }
}

// gen_bool panics outside [0, 1].
fn clamp(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}
