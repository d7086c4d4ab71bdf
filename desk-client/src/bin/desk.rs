use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use desk_client::api::auth;
use desk_client::logger::init_logger;
use desk_client::{ClientConfig, DraftFile, LoginRequest, NetworkHttpClient, TransactionService};
use rust_decimal::Decimal;
use shared::billing::{DraftSummary, Settlement, round_money};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "desk")]
#[command(about = "Compute and submit sales, purchases and bills")]
#[command(version)]
struct Cli {
    /// Print results and logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals and settlement of a draft file
    Totals {
        /// Draft JSON file
        file: PathBuf,
    },
    /// Validate a draft file and save it through the API
    Submit {
        /// Draft JSON file
        file: PathBuf,
    },
    /// Log in and print a token for DESK_API_TOKEN
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

fn read_draft(path: &Path) -> Result<DraftFile> {
    DraftFile::from_path(path).with_context(|| format!("Failed to load draft {}", path.display()))
}

fn money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

fn balance_line(s: &Settlement) -> String {
    if s.is_settled() {
        "Outstanding:     settled".to_string()
    } else if s.is_overpaid() {
        format!("Overpaid by:     {}", money(-s.outstanding))
    } else {
        format!("Outstanding:     {}", money(s.outstanding))
    }
}

fn print_summary(summary: &DraftSummary) {
    let t = &summary.totals;
    let s = &summary.settlement;
    println!("Subtotal:        {}", money(t.sub_total));
    println!("Discount:        {}", money(t.discount_amount));
    match t.gst_percentage {
        Some(rate) => println!("GST @ {rate}%:      {}", money(t.gst_amount)),
        None => println!("GST:             {}", money(t.gst_amount)),
    }
    println!("Final amount:    {}", money(t.final_amount));
    println!("Cash received:   {}", money(s.cash_received));
    println!("Online received: {}", money(s.online_received));
    println!("{}", balance_line(s));
    if t.is_over_discounted() {
        println!("warning: discount exceeds subtotal plus GST");
    }
}

impl Cli {
    async fn run(self) -> Result<()> {
        match self.command {
            Commands::Totals { file } => {
                let draft = read_draft(&file)?.to_draft()?;
                let summary = draft.summary();
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                } else {
                    print_summary(&summary);
                }
            }
            Commands::Submit { file } => {
                let (header, mut draft) = read_draft(&file)?.load()?;
                let config = ClientConfig::from_env()?;
                let service = TransactionService::new(NetworkHttpClient::new(&config)?);
                let outcome = service.submit(&header, &mut draft).await?;
                if self.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::json!({
                            "kind": outcome.kind,
                            "reference": outcome.reference,
                            "final_amount": outcome.final_amount,
                            "outstanding": outcome.outstanding,
                            "message": outcome.message(),
                        }))?
                    );
                } else {
                    println!("{}", outcome.message());
                }
            }
            Commands::Login { email, password } => {
                let config = ClientConfig::from_env()?;
                let mut client = NetworkHttpClient::new(&config)?;
                let response = auth::login(&mut client, &LoginRequest::new(email, password)).await?;
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                } else if let Some(token) = response.token {
                    println!("{token}");
                }
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logger(cli.json);

    cli.run().await
}
