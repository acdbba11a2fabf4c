//! CLI operator tool for the lead capture pipeline.
//!
//! Drives the same submission flow the site uses, against the configured
//! store, so store wiring can be verified end to end before a deploy.
//!
//! # Usage
//!
//! ```bash
//! # Submit a test lead interactively
//! cargo run --bin leadctl -- submit
//!
//! # Submit without prompts
//! cargo run --bin leadctl -- submit -n "Jo" -e jo@example.com -m "Hello there, I have a question."
//!
//! # Exercise the flow without touching the real store
//! cargo run --bin leadctl -- submit --dry-run
//!
//! # Check store reachability
//! cargo run --bin leadctl -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the service: `CONTACT_STORE_URL` + `CONTACT_STORE_KEY`, or
//! `DATABASE_URL` (not required with `--dry-run`).

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use sqlx::postgres::PgPoolOptions;

use memotag_site::config::{self, Config, StoreConfig};
use memotag_site::infrastructure::persistence::{MemoryLeadStore, PgLeadStore, RestLeadStore};
use memotag_site::prelude::*;

/// CLI tool for exercising the lead capture pipeline.
#[derive(Parser)]
#[command(name = "leadctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a lead through the full capture flow
    Submit {
        /// Lead name (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Lead email (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Lead message (prompted when omitted)
        #[arg(short, long)]
        message: Option<String>,

        /// Use an in-memory store instead of the configured backend
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that the configured store is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            name,
            email,
            message,
            dry_run,
        } => submit(name, email, message, dry_run).await,
        Commands::Check => check().await,
    }
}

/// Builds the store backend the way the service does, minus migrations.
async fn build_store(config: &Config) -> Result<Arc<dyn LeadStore>> {
    match &config.store {
        StoreConfig::Rest { endpoint, api_key } => {
            Ok(Arc::new(RestLeadStore::new(endpoint, api_key.clone())?))
        }
        StoreConfig::Postgres { database_url } => {
            let pool = PgPoolOptions::new()
                .max_connections(1)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            Ok(Arc::new(PgLeadStore::new(Arc::new(pool))))
        }
    }
}

/// Submits one lead and narrates every state transition, including the
/// timed return to idle.
async fn submit(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
    dry_run: bool,
) -> Result<()> {
    println!("{}", "Submit test lead".bright_blue().bold());
    println!();

    let (store, reset_window): (Arc<dyn LeadStore>, Duration) = if dry_run {
        println!("{}", "Using in-memory store (dry run)".yellow());
        (Arc::new(MemoryLeadStore::new()), Duration::from_secs(3))
    } else {
        let config = config::load_from_env()?;
        (build_store(&config).await?, config.reset_window())
    };

    println!("Store: {}", store.kind().cyan());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let message = match message {
        Some(m) => m,
        None => Input::new().with_prompt("Message").interact_text()?,
    };

    let service = Arc::new(LeadService::new(store));
    let flow = SubmissionFlow::with_reset_window(service, reset_window);

    println!();
    println!("{}", "status: submitting".blue());

    let outcome = flow
        .submit(LeadDraft {
            name,
            email,
            message,
        })
        .await;

    match outcome {
        SubmitOutcome::Rejected(errors) => {
            println!("{}", "Validation failed:".red().bold());
            for (field, violations) in errors.field_errors() {
                for violation in violations {
                    let text = violation
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| violation.code.to_string());
                    println!("  {}: {}", field.to_string().cyan(), text.red());
                }
            }
            println!();
            println!("Nothing was sent to the store.");
        }
        SubmitOutcome::Accepted => {
            println!("{}", "status: success".green().bold());
            println!("Lead accepted; form input cleared.");
            wait_for_reset(&flow, reset_window).await;
        }
        SubmitOutcome::Failed => {
            println!("{}", "status: error".red().bold());
            println!("Could not send message. The typed values were kept for a manual retry.");
            wait_for_reset(&flow, reset_window).await;
        }
        SubmitOutcome::Ignored => {
            println!("{}", "A submission was already in flight; attempt ignored.".yellow());
        }
    }

    Ok(())
}

/// Waits out the feedback window and confirms the flow settles back to idle.
async fn wait_for_reset(flow: &SubmissionFlow, reset_window: Duration) {
    println!(
        "Waiting {}s for the feedback window...",
        reset_window.as_secs()
    );
    tokio::time::sleep(reset_window + Duration::from_millis(200)).await;

    if flow.status().await == SubmissionStatus::Idle {
        println!("{}", "status: idle".bright_black());
    } else {
        println!("{}", "flow did not settle back to idle".yellow());
    }
}

/// Probes the configured store.
async fn check() -> Result<()> {
    println!("{}", "Checking store connection...".bright_blue());

    let config = config::load_from_env()?;
    let store = build_store(&config).await?;

    if store.health_check().await {
        println!("{} ({})", "Store reachable".green().bold(), store.kind());
        Ok(())
    } else {
        println!("{} ({})", "Store unreachable".red().bold(), store.kind());
        anyhow::bail!("store health check failed")
    }
}
