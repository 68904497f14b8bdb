use checkout_payments::application::checkout::Checkout;
use checkout_payments::application::facade::PaymentFacade;
use checkout_payments::config::{
    AuthorizeNetConfig, Environment, LatencyProfile, PayPalConfig, Secret, Settings, StripeConfig,
};
use checkout_payments::domain::ports::{OutcomeProviderRef, PaymentGatewayBox};
use checkout_payments::infrastructure::outcome::{FixedOutcome, SeededOutcome};
use checkout_payments::interfaces::csv::order_reader::OrderReader;
use checkout_payments::interfaces::csv::result_writer::ResultWriter;
use clap::{Args, Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file
    input: PathBuf,

    /// How simulated providers decide approvals
    #[arg(long, value_enum, default_value_t = OutcomeMode::Random)]
    outcome: OutcomeMode,

    /// Seed for reproducible random outcomes (implies --outcome random)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated provider latency
    #[arg(long)]
    instant: bool,

    #[command(flatten)]
    credentials: CredentialArgs,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutcomeMode {
    Random,
    Approve,
    Decline,
}

#[derive(Args)]
struct CredentialArgs {
    #[arg(long, env = "STRIPE_PUBLISHABLE_KEY", default_value = "pk_test_demo", hide_env_values = true)]
    stripe_publishable_key: String,
    #[arg(long, env = "STRIPE_SECRET_KEY", default_value = "sk_test_demo", hide_env_values = true)]
    stripe_secret_key: String,
    #[arg(long, env = "STRIPE_WEBHOOK_SECRET", default_value = "whsec_demo", hide_env_values = true)]
    stripe_webhook_secret: String,
    #[arg(long, env = "PAYPAL_CLIENT_ID", default_value = "demo_paypal_client_id", hide_env_values = true)]
    paypal_client_id: String,
    #[arg(long, env = "PAYPAL_CLIENT_SECRET", default_value = "demo_paypal_secret", hide_env_values = true)]
    paypal_client_secret: String,
    #[arg(long, env = "PAYPAL_ENVIRONMENT", default_value = "sandbox")]
    paypal_environment: String,
    #[arg(long, env = "AUTHORIZE_NET_API_LOGIN_ID", default_value = "demo_login_id", hide_env_values = true)]
    authorize_net_api_login_id: String,
    #[arg(long, env = "AUTHORIZE_NET_TRANSACTION_KEY", default_value = "demo_transaction_key", hide_env_values = true)]
    authorize_net_transaction_key: String,
    #[arg(long, env = "AUTHORIZE_NET_ENVIRONMENT", default_value = "sandbox")]
    authorize_net_environment: String,
}

impl CredentialArgs {
    fn into_settings(self, latency: LatencyProfile) -> checkout_payments::error::Result<Settings> {
        Ok(Settings {
            stripe: StripeConfig {
                publishable_key: Secret::new(self.stripe_publishable_key),
                secret_key: Secret::new(self.stripe_secret_key),
                webhook_secret: Secret::new(self.stripe_webhook_secret),
            },
            paypal: PayPalConfig {
                client_id: Secret::new(self.paypal_client_id),
                client_secret: Secret::new(self.paypal_client_secret),
                environment: self.paypal_environment.parse::<Environment>()?,
            },
            authorize_net: AuthorizeNetConfig {
                api_login_id: Secret::new(self.authorize_net_api_login_id),
                transaction_key: Secret::new(self.authorize_net_transaction_key),
                environment: self.authorize_net_environment.parse::<Environment>()?,
            },
            latency,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean CSV.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let latency = if cli.instant {
        LatencyProfile::instant()
    } else {
        LatencyProfile::default()
    };
    let settings = cli.credentials.into_settings(latency).into_diagnostic()?;
    settings.validate().into_diagnostic()?;

    let outcome: Option<OutcomeProviderRef> = match (cli.outcome, cli.seed) {
        (OutcomeMode::Approve, _) => Some(Arc::new(FixedOutcome::approve())),
        (OutcomeMode::Decline, _) => Some(Arc::new(FixedOutcome::decline())),
        (OutcomeMode::Random, Some(seed)) => Some(Arc::new(SeededOutcome::new(seed))),
        (OutcomeMode::Random, None) => None,
    };

    let facade = match outcome {
        Some(outcome) => PaymentFacade::new(settings, outcome),
        None => PaymentFacade::with_random_outcomes(settings),
    };
    let gateway: PaymentGatewayBox = Box::new(facade);
    let checkout = Checkout::new(gateway);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    let (mut approved, mut declined) = (0usize, 0usize);
    for request in reader.requests() {
        match request {
            Ok(request) => {
                let outcome = checkout.process(request).await;
                if outcome.result.success() {
                    approved += 1;
                } else {
                    declined += 1;
                }
                writer.write(&outcome).into_diagnostic()?;
            }
            Err(e) => {
                error!("Error reading order: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    info!(approved, declined, "Checkout finished");
    Ok(())
}
