use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "ledger-demo")]
#[command(about = "client cli used to fetch orders and payments from the server", version, long_about = None
)]
struct Cli {
    #[arg(long, default_value = HOST, help = "Base url of the server")]
    host: String,
    #[arg(long = "header", short = 'H', help = "Extra request header, repeatable.", value_name = "NAME=VALUE", value_parser = parse_header)]
    headers: Vec<(String, String)>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// list orders
    Orders,
    /// list payments
    Payments,
}

const HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct Order {
    id: i64,
    name: String,
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct Payment {
    id: i64,
    name: String,
    amount: f64,
    date: chrono::NaiveDate,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got {raw}")),
    }
}

async fn fetch<T: for<'de> Deserialize<'de>>(cli: &Cli, path: &str) -> Result<Vec<T>, anyhow::Error> {
    let url = format!("{}/{}", cli.host.trim_end_matches('/'), path);
    let mut req = Client::new().get(&url);
    for (name, value) in &cli.headers {
        req = req.header(name.as_str(), value.as_str());
    }
    let res = req
        .send()
        .await
        .with_context(|| format!("failed to reach {url}"))?;
    match res.status() {
        StatusCode::OK => res
            .json::<Vec<T>>()
            .await
            .map_err(|e| anyhow!("failed to decode response from {url}, {e}")),
        unexpected => bail!("got unexpected status code, {}", unexpected),
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Orders => {
            let orders = fetch::<Order>(&cli, "orders").await?;
            println!("{} orders", orders.len());
            for Order { id, name, amount } in orders {
                println!("#{id} {name} {amount:.2}");
            }
        }
        Commands::Payments => {
            let payments = fetch::<Payment>(&cli, "payments").await?;
            println!("{} payments", payments.len());
            for Payment { id, name, amount, date } in payments {
                println!("#{id} {name} {amount:.2} on {date}");
            }
        }
    };
    Ok(())
}
