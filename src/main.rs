use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use donorlink::config::Config;
use donorlink::domain::{DonationStatus, NeedPriority};
use donorlink::logging::init_tracing;
use donorlink::remote::RemoteClient;
use donorlink::repository::{
    AdminRepository, AuthRepository, DonationCriteria, DonationRepository, NeedCriteria,
    NeedsRepository, OrphanageCriteria, OrphanageRepository,
};
use donorlink::session::SessionContext;
use donorlink::viewmodel::{NeedFilterChange, NeedsViewModel};

#[derive(Parser)]
#[command(name = "donorlink")]
#[command(about = "Browse needs, donations and orphanages on a donorlink backend", long_about = None)]
struct Cli {
    /// Config file path (default: the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Sign in as this user before running the command
    #[arg(long, global = true, requires = "password")]
    email: Option<String>,

    #[arg(long, global = true, requires = "email")]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List needs, most urgent first
    Needs {
        /// Only needs of this orphanage
        #[arg(long)]
        orphanage: Option<String>,

        /// Only this priority (low, medium, high, urgent)
        #[arg(long)]
        priority: Option<String>,

        /// Case-insensitive search over item name and description
        #[arg(long)]
        search: Option<String>,
    },

    /// List donations
    Donations {
        #[arg(long)]
        donor: Option<String>,

        #[arg(long)]
        orphanage: Option<String>,

        /// Only this status (pending, confirmed, completed, cancelled)
        #[arg(long)]
        status: Option<String>,
    },

    /// List orphanages
    Orphanages {
        /// Only verified orphanages
        #[arg(long)]
        verified: bool,

        #[arg(long)]
        city: Option<String>,
    },

    /// List need categories
    Categories,

    /// Show admin dashboard counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let client = RemoteClient::new(&config, SessionContext::new())
        .context("failed to build backend client")?;

    if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        let user = AuthRepository::new(&client)
            .sign_in(email, password)
            .await
            .context("sign in failed")?;
        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
    }

    match cli.command {
        Command::Needs {
            orphanage,
            priority,
            search,
        } => {
            let criteria = match orphanage {
                Some(id) => NeedCriteria::for_orphanage(id),
                None => NeedCriteria::default(),
            }
            .by_priority();
            let view = NeedsViewModel::with_criteria(NeedsRepository::new(&client), criteria);
            if let Some(priority) = priority {
                view.set_filter(NeedFilterChange::Priority(Some(NeedPriority::parse(&priority))));
            }
            if let Some(search) = search {
                view.set_filter(NeedFilterChange::Search(search));
            }
            view.load().await;
            let snapshot = view.snapshot();
            if let Some(error) = snapshot.error {
                anyhow::bail!(error);
            }
            print_lines(&snapshot.filtered)?;
        }
        Command::Donations {
            donor,
            orphanage,
            status,
        } => {
            let criteria = DonationCriteria {
                donor_id: donor,
                orphanage_id: orphanage,
                status: status.as_deref().map(DonationStatus::parse),
                ..DonationCriteria::default()
            };
            let donations = DonationRepository::new(&client).fetch_all(&criteria).await?;
            print_lines(&donations)?;
        }
        Command::Orphanages { verified, city } => {
            let base = if verified {
                OrphanageCriteria::verified()
            } else {
                OrphanageCriteria::default()
            };
            let criteria = OrphanageCriteria { city, ..base };
            let orphanages = OrphanageRepository::new(&client).fetch_all(&criteria).await?;
            print_lines(&orphanages)?;
        }
        Command::Categories => {
            let categories = NeedsRepository::new(&client).fetch_categories().await?;
            print_lines(&categories)?;
        }
        Command::Stats => {
            let stats = AdminRepository::new(&client).dashboard_stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

fn print_lines<T: Serialize>(records: &[T]) -> Result<()> {
    for record in records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}
