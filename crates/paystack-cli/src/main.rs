//! Paystack CLI - runs one API call and prints the result as JSON.
//!
//! ```text
//! paystack balance
//! paystack customers [page] [per-page]
//! paystack customer <id-or-code>
//! paystack banks
//! ```
//!
//! The secret key comes from `.secrets/paystack.json` or
//! `PAYSTACK_SECRET_KEY`; see [`paystack_client::load_secret`].

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paystack_client::{
    ApiResponse, BankOptions, ClientOptions, Context, ListOptions, PaystackClient,
};

/// `paystack` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "paystack",
    about = "Run one Paystack API call and print the result",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Show the integration's balance per currency.
    Balance,
    /// List customers one page at a time.
    Customers {
        /// Page to fetch, starting at 1.
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Records per page.
        #[arg(
            value_name = "per-page",
            default_value_t = 50,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        per_page: u32,
    },
    /// Fetch one customer.
    Customer {
        /// Customer id or code.
        #[arg(value_name = "id-or-code")]
        id: String,
    },
    /// List supported banks.
    Banks,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,paystack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Cli { command } = Cli::parse();

    let options = ClientOptions::from_env()?;
    let secret = paystack_client::load_secret().unwrap_or_else(|| {
        tracing::warn!("No Paystack secret configured, requests will be unauthorized");
        String::new()
    });
    tracing::info!(
        base_url = %options.base_url,
        timeout_seconds = options.timeout_seconds,
        secret_configured = !secret.is_empty(),
        "Client configuration loaded"
    );
    let client = PaystackClient::with_options(secret, options)?;

    let (ctx, cancel) = Context::with_cancel();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("received ctrl+c, cancelling request");
            cancel.cancel();
        }
    });

    run(&client, &ctx, command).await
}

async fn run(
    client: &PaystackClient,
    ctx: &Context,
    command: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Balance => print(client.balance().check(ctx).await?),
        Command::Customers { page, per_page } => {
            let reply = client
                .customers()
                .list(ctx, &ListOptions::page(page, per_page))
                .await?;
            if let Some(next) = reply.response.next_page() {
                tracing::info!(next, "more customers available");
            }
            print(reply)
        }
        Command::Customer { id } => print(client.customers().fetch(ctx, &id).await?),
        Command::Banks => print(
            client
                .miscellaneous()
                .list_banks(ctx, &BankOptions::default())
                .await?,
        ),
    }
}

fn print<T: Serialize>(reply: ApiResponse<T>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(message) = &reply.message {
        tracing::info!(status = reply.response.status.as_u16(), %message, "request complete");
    }
    println!("{}", serde_json::to_string_pretty(&reply.data)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("paystack").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse(&["balance"]).unwrap(), Command::Balance);
        assert_eq!(parse(&["banks"]).unwrap(), Command::Banks);
        assert_eq!(
            parse(&["customer", "CUS_xnxdt6s1zg1f4nx"]).unwrap(),
            Command::Customer { id: "CUS_xnxdt6s1zg1f4nx".into() }
        );
    }

    #[test]
    fn customers_paging_defaults() {
        assert_eq!(
            parse(&["customers"]).unwrap(),
            Command::Customers { page: 1, per_page: 50 }
        );
        assert_eq!(
            parse(&["customers", "3", "10"]).unwrap(),
            Command::Customers { page: 3, per_page: 10 }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["refund"]).is_err());
        assert!(parse(&["customer"]).is_err());
        assert!(parse(&["customers", "0"]).is_err());
        assert!(parse(&["customers", "two"]).is_err());
        assert!(parse(&["balance", "extra"]).is_err());
    }
}
