use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// Event check-in kiosk backed by SQLite
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple event check-in kiosk: import a CSV roster, search names, check attendees in",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a separate event)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// View or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, info)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Import attendees from a CSV roster ("-" reads stdin)
    Import {
        #[arg(value_name = "FILE")]
        file: String,

        #[arg(long, help = "Print the import report as JSON")]
        json: bool,
    },

    /// Search attendees by first or last name
    Search {
        query: String,

        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },

    /// Show a single attendee
    Show {
        id: i64,

        #[arg(long, help = "Print the attendee as JSON")]
        json: bool,
    },

    /// Check an attendee in
    #[command(name = "checkin", visible_alias = "check-in")]
    CheckIn {
        id: i64,

        #[arg(long, help = "Print the outcome as JSON")]
        json: bool,
    },

    /// Undo an attendee's check-in
    Undo {
        id: i64,

        #[arg(long, help = "Print the outcome as JSON")]
        json: bool,
    },

    /// Show roster statistics
    Stats {
        #[arg(long, help = "Print statistics as JSON")]
        json: bool,
    },

    /// Delete ALL attendees
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the roster
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "checked-in", help = "Only attendees already checked in")]
        checked_in: bool,

        #[arg(
            long = "pending",
            conflicts_with = "checked_in",
            help = "Only attendees not yet checked in"
        )]
        pending: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },
}
