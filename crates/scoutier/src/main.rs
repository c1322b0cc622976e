//! `Scoutier` - outreach campaign composer and contact list importer.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod config;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoutier_core::{AppState, CampaignDraft, ContactListId, SourceFile, Store};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoutier=info,scoutier_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let db_path = config::database_path(cli.database.as_deref());
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    info!("Using database {}", db_path.display());

    let store = Store::new(&db_path.to_string_lossy())
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    let mut state = AppState::open(store).await?;

    let result = run(&mut state, cli.command).await;
    exit_code(result)
}

/// Maps a command outcome to the process exit code. Errors the user can fix
/// are reported and exit with failure; anything else propagates.
fn exit_code(result: scoutier_core::Result<()>) -> Result<ExitCode> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_recoverable() => {
            warn!("{e}");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

async fn run(state: &mut AppState, command: Command) -> scoutier_core::Result<()> {
    match command {
        Command::Import { file, mime } => {
            let source = SourceFile::read(&file, mime.as_deref()).await?;
            let list = state.import_contacts(&source).await?;
            println!(
                "Processed {} entries. Found {} valid emails.",
                list.total, list.valid
            );
            println!(
                "total: {}  valid: {}  duplicates/invalid: {}",
                list.total, list.valid, list.duplicates
            );
        }
        Command::Lists => {
            if state.contact_lists().is_empty() {
                println!("No contact lists yet. Import a CSV, Excel or text file to get started.");
            }
            for list in state.contact_lists_newest_first() {
                println!(
                    "{:>15}  {:<30} total {:>6}  valid {:>6} ({}%)  {}",
                    list.id,
                    list.name,
                    list.total,
                    list.valid,
                    list.valid_rate(),
                    list.display_date()
                );
            }
        }
        Command::Options => {
            if state.contact_lists().is_empty() {
                println!("No contact lists yet - import contacts first");
            }
            for option in state.contact_options() {
                println!("{}  {}", option.id, option.label);
            }
        }
        Command::Delete { id } => {
            if state.delete_contact_list(ContactListId::new(id)).await? {
                println!("Contact list deleted");
            } else {
                println!("No contact list with id {id}");
            }
        }
        Command::Preview { subject, body } => {
            let preview = state.preview(&subject, &body)?;
            println!("Subject: {}\n\n{}", preview.subject, preview.body);
        }
        Command::Campaign {
            name,
            subject,
            body,
        } => {
            let campaign = state
                .launch_campaign(CampaignDraft {
                    name,
                    subject,
                    body,
                })
                .await?;
            println!("Campaign {} launched: {}", campaign.id, campaign.name);
        }
        Command::Campaigns => {
            for campaign in state.campaigns() {
                println!(
                    "{:>15}  {:<30} {:<8} {}",
                    campaign.id,
                    campaign.name,
                    campaign.status.display_name(),
                    campaign.created_at.format("%b %-d, %Y")
                );
            }
        }
        Command::Template { subject, body } => {
            let template = state.save_template(&subject, &body).await?;
            println!("Template {} saved", template.id);
        }
        Command::Templates => {
            for template in state.templates() {
                println!("{:>15}  {}  {}", template.id, template.name, template.subject);
            }
        }
        Command::Theme { toggle } => {
            let theme = if toggle {
                state.toggle_theme().await?
            } else {
                state.theme()
            };
            println!("{theme}");
        }
    }

    Ok(())
}
