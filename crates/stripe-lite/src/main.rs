use clap::{Parser, Subcommand};
use serde::Serialize;
use stripe::{Client, ClientConfig, StripeError, DEFAULT_API_BASE, DEFAULT_CURRENCY};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Create Stripe customers and charges from the command line.
#[derive(Parser)]
#[command(name = "stripe-cli", version)]
struct Cli {
    /// Secret API key (use a test-mode key).
    #[arg(long, env = "STRIPE_API_KEY", hide_env_values = true)]
    key: String,

    #[arg(long, env = "STRIPE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Currency used for charges.
    #[arg(long, env = "STRIPE_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a customer from a payment token.
    Customer { token: String, email: String },
    /// Charge an existing customer.
    Charge { customer_id: String, amount: u64 },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match ClientConfig::new(cli.key).try_with_base_url(&cli.api_base) {
        Ok(config) => config.with_currency(cli.currency),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    let client = Client::with_config(config);

    let result = match cli.command {
        Command::Customer { token, email } => report(client.customer(&token, &email).await),
        Command::Charge {
            customer_id,
            amount,
        } => report(client.charge(&customer_id, amount).await),
    };

    if let Err(e) = result {
        match e {
            StripeError::Api(e) => {
                eprintln!("Stripe rejected the request ({})", e.error_type);
                eprintln!("  message: {}", e.message);
                if !e.code.is_empty() {
                    eprintln!("  code:    {}", e.code);
                }
                if !e.param.is_empty() {
                    eprintln!("  param:   {}", e.param);
                }
                if !e.doc_url.is_empty() {
                    eprintln!("  docs:    {}", e.doc_url);
                }
            }
            other => eprintln!("Error: {other}"),
        }
        std::process::exit(1);
    }
}

/// Print a created entity as pretty JSON.
fn report<T: Serialize>(result: Result<T, StripeError>) -> Result<(), StripeError> {
    let entity = result?;
    println!(
        "{}",
        serde_json::to_string_pretty(&entity).unwrap_or_default()
    );
    Ok(())
}
