//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Compose outreach campaigns and import contact lists.
#[derive(Parser, Debug)]
#[command(name = "scoutier", version, about)]
pub struct Cli {
    /// Path to the database file
    #[arg(long, value_name = "PATH", env = "SCOUTIER_DB", global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import email addresses from a CSV, Excel or text file
    Import {
        /// File to import
        file: PathBuf,
        /// MIME type reported for the file
        #[arg(long)]
        mime: Option<String>,
    },
    /// Show stored contact lists, newest first
    Lists,
    /// Show contact lists as campaign recipients
    Options,
    /// Delete a contact list
    Delete {
        /// Contact list id
        id: i64,
    },
    /// Render a subject and body with sample recipient data
    Preview {
        /// Subject line
        #[arg(long)]
        subject: String,
        /// Message body
        #[arg(long)]
        body: String,
    },
    /// Launch a campaign
    Campaign {
        /// Campaign name
        #[arg(long, default_value = "")]
        name: String,
        /// Subject line
        #[arg(long, default_value = "")]
        subject: String,
        /// Message body
        #[arg(long, default_value = "")]
        body: String,
    },
    /// Show launched campaigns
    Campaigns,
    /// Save a subject and body as a template
    Template {
        /// Subject line
        #[arg(long)]
        subject: String,
        /// Message body
        #[arg(long)]
        body: String,
    },
    /// Show saved templates
    Templates,
    /// Show the theme, or switch it
    Theme {
        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_import() {
        let cli = Cli::try_parse_from(["scoutier", "import", "leads.csv", "--mime", "text/csv"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            cli.command,
            Command::Import { ref file, mime: Some(ref mime) }
                if file == &PathBuf::from("leads.csv") && mime == "text/csv"
        ));
    }

    #[test]
    fn test_parse_database_after_subcommand() {
        let cli = Cli::try_parse_from(["scoutier", "lists", "--database", "/tmp/x.db"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.db")));
    }
}
