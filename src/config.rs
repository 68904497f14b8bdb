//! Provider credentials and simulation settings.
//!
//! A [`Settings`] value is built once at process start and handed to the
//! providers; nothing in the crate reads credentials from globals.

use crate::error::{PaymentError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// A credential value. Never rendered by `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Demo values start with one of these prefixes.
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty() || ["demo", "pk_test_demo", "sk_test_demo", "whsec_demo"]
            .iter()
            .any(|prefix| self.0.starts_with(prefix))
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl FromStr for Environment {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" | "live" => Ok(Environment::Production),
            other => Err(PaymentError::ConfigError(format!(
                "unknown environment '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StripeConfig {
    pub publishable_key: Secret,
    pub secret_key: Secret,
    pub webhook_secret: Secret,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            publishable_key: Secret::new("pk_test_demo"),
            secret_key: Secret::new("sk_test_demo"),
            webhook_secret: Secret::new("whsec_demo"),
        }
    }
}

impl StripeConfig {
    /// Live keys are what decide Stripe's environment.
    pub fn environment(&self) -> Environment {
        if self.secret_key.expose().starts_with("sk_live_") {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayPalConfig {
    pub client_id: Secret,
    pub client_secret: Secret,
    pub environment: Environment,
}

impl Default for PayPalConfig {
    fn default() -> Self {
        Self {
            client_id: Secret::new("demo_paypal_client_id"),
            client_secret: Secret::new("demo_paypal_secret"),
            environment: Environment::Sandbox,
        }
    }
}

impl PayPalConfig {
    /// Where the buyer is sent to approve an order.
    pub fn checkout_url(&self) -> &'static str {
        match self.environment {
            Environment::Sandbox => "https://www.sandbox.paypal.com/checkoutnow",
            Environment::Production => "https://www.paypal.com/checkoutnow",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizeNetConfig {
    pub api_login_id: Secret,
    pub transaction_key: Secret,
    pub environment: Environment,
}

impl Default for AuthorizeNetConfig {
    fn default() -> Self {
        Self {
            api_login_id: Secret::new("demo_login_id"),
            transaction_key: Secret::new("demo_transaction_key"),
            environment: Environment::Sandbox,
        }
    }
}

/// Simulated network latency per provider operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub stripe_confirm: Duration,
    pub paypal_capture: Duration,
    pub authorize_net_authorize: Duration,
    pub refund: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            stripe_confirm: Duration::from_millis(1000),
            paypal_capture: Duration::from_millis(1500),
            authorize_net_authorize: Duration::from_millis(2000),
            refund: Duration::from_millis(1000),
        }
    }
}

impl LatencyProfile {
    pub fn instant() -> Self {
        Self {
            stripe_confirm: Duration::ZERO,
            paypal_capture: Duration::ZERO,
            authorize_net_authorize: Duration::ZERO,
            refund: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub stripe: StripeConfig,
    pub paypal: PayPalConfig,
    pub authorize_net: AuthorizeNetConfig,
    pub latency: LatencyProfile,
}

impl Settings {
    /// Rejects production environments that still carry demo credentials.
    ///
    /// Demo credentials in sandbox are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (
                "stripe",
                self.stripe.environment(),
                [&self.stripe.secret_key, &self.stripe.webhook_secret],
            ),
            (
                "paypal",
                self.paypal.environment,
                [&self.paypal.client_id, &self.paypal.client_secret],
            ),
            (
                "authorize_net",
                self.authorize_net.environment,
                [
                    &self.authorize_net.api_login_id,
                    &self.authorize_net.transaction_key,
                ],
            ),
        ];

        for (provider, environment, secrets) in checks {
            if !secrets.iter().any(|secret| secret.is_placeholder()) {
                continue;
            }
            match environment {
                Environment::Production => {
                    return Err(PaymentError::ConfigError(format!(
                        "{provider} is configured for production with placeholder credentials"
                    )));
                }
                Environment::Sandbox => {
                    warn!(provider, "Using placeholder credentials");
                }
            }
        }
        Ok(())
    }
}
