use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rcheckin
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small attendance CLI: check people in and out, browse the log and export it as CSV",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (integrity check, statistics, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Record an arrival
    Checkin {
        first_name: String,
        last_name: String,
    },

    /// Record a departure, by roster id (preferred) or by name
    Checkout {
        #[arg(required_unless_present = "id")]
        first_name: Option<String>,

        #[arg(required_unless_present = "id")]
        last_name: Option<String>,

        #[arg(
            long = "id",
            conflicts_with_all = ["first_name", "last_name"],
            help = "Id of the person's check-in as shown by `roster`"
        )]
        id: Option<i64>,
    },

    /// Show who is currently checked in
    Roster,

    /// Show the current status of one person
    Status {
        first_name: String,
        last_name: String,
    },

    /// Show the most recent records
    Recent,

    /// Browse the record log, optionally filtered
    Log {
        #[arg(long = "first-name")]
        first_name: Option<String>,

        #[arg(long = "last-name")]
        last_name: Option<String>,

        #[arg(long = "action", help = "Check-In | Check-Out (also: in, out)")]
        action: Option<String>,

        #[arg(long = "limit", help = "Number of rows, 1-100 (default from config)")]
        limit: Option<usize>,
    },

    /// Print the internal audit log
    Audit,

    /// Export all records (requires the shared credentials)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "user")]
        user: Option<String>,

        #[arg(long = "password")]
        password: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
