use clap::{Parser, Subcommand};
use std::sync::Arc;
use street_ledger::account::{AccountProvider, StaticAccount};
use street_ledger::chain::{self, MockSubmitter, TransactionSubmitter};
use street_ledger::config;
use street_ledger::errors::{Error, Result};
use street_ledger::ledger::{DebtLedger, parse_amount};
use street_ledger::session::{MockSessionProvider, SessionProvider, SessionRequest};
use street_ledger::store::FileStore;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Street Ledger - record, list and settle informal debts.
///
/// In mock mode (the default) debts live purely in the on-device ledger
/// file. With `mock_mode = false` each mutation additionally builds the
/// corresponding Move call and hands it to the transaction submitter after
/// the local mutation commits.
#[derive(Parser)]
#[command(name = "street-ledger", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a new debt
    Create {
        /// Amount owed, in smallest currency units
        amount: String,
        /// Address of the party who owes
        debtor: String,
        /// Reason for the debt
        description: String,
        /// Address of the party owed; defaults to your configured address
        #[arg(long)]
        creditor: Option<String>,
    },
    /// List all open debts, most recent first
    List,
    /// Settle (remove) a debt by id
    Settle {
        /// Id of the debt to settle
        id: String,
    },
    /// Show the open-debt count and total owed
    Stats,
    /// Open an off-chain street-favor session with a friend
    Session {
        /// The friend's address
        friend: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env non-fatally; env vars can be set externally
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;
    info!(
        mock_mode = app_config.mock_mode,
        ledger_path = %app_config.ledger_path,
        "configuration loaded"
    );

    let account = match &app_config.self_address {
        Some(address) => StaticAccount::connected(address),
        None => StaticAccount::disconnected(),
    };
    let store = Arc::new(FileStore::new(&app_config.ledger_path));
    let ledger = DebtLedger::new(store, account.current_address());

    // Real wallet and state-channel adapters plug in behind these traits;
    // the bundled ones accept everything and log what they were handed.
    let submitter = MockSubmitter::new();
    let sessions = MockSessionProvider::new();

    match cli.command {
        Command::Create {
            amount,
            debtor,
            description,
            creditor,
        } => {
            let amount_owed = parse_amount(&amount)?;
            let record =
                ledger.create_debt(amount_owed, &debtor, &description, creditor.as_deref())?;
            println!("Recorded debt {} ({} owed by {})", record.id, record.amount_owed, record.debtor);

            if !app_config.mock_mode {
                let package_id = require_package_id(&app_config)?;
                let call = chain::request_debt_call(
                    package_id,
                    record.amount_owed,
                    &record.debtor,
                    &record.description,
                );
                // A submission failure leaves the local record in place
                match submitter.submit(&call).await {
                    Ok(receipt) => println!("Submitted on-chain request: {}", receipt.digest),
                    Err(e) => warn!("On-chain request failed (local record kept): {e}"),
                }
            }
        }
        Command::List => {
            let debts = ledger.list_debts()?;
            if debts.is_empty() {
                println!("No open debts.");
            }
            for debt in debts {
                println!(
                    "{}  {:>12}  {} owes {}  ({})",
                    debt.id, debt.amount_owed, debt.debtor, debt.creditor, debt.description
                );
            }
        }
        Command::Settle { id } => {
            ledger.settle_debt(&id)?;
            println!("Settled {id}");

            if !app_config.mock_mode {
                let package_id = require_package_id(&app_config)?;
                let call = chain::settle_debt_call(package_id, &id);
                match submitter.submit(&call).await {
                    Ok(receipt) => println!("Submitted on-chain settlement: {}", receipt.digest),
                    Err(e) => warn!("On-chain settlement failed (local state kept): {e}"),
                }
            }
        }
        Command::Stats => {
            let stats = ledger.stats()?;
            println!("{} open debts, {} owed in total", stats.count, stats.total_owed);
        }
        Command::Session { friend } => {
            let self_address = account.current_address().ok_or_else(|| Error::Config {
                message: "self_address must be configured to open a session".to_string(),
            })?;
            let request = SessionRequest::street_favor(&self_address, &friend)?;
            let handle = sessions.open_session(&request).await?;
            println!("Opened session {} with {friend}", handle.session_id);
        }
    }

    Ok(())
}

fn require_package_id(app_config: &config::AppConfig) -> Result<&str> {
    app_config
        .package_id
        .as_deref()
        .ok_or_else(|| Error::Config {
            message: "package_id must be configured when mock_mode is off".to_string(),
        })
}
