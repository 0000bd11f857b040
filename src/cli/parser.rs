use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for drivepay
#[derive(Parser)]
#[command(
    name = "drivepay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log parcels, collections and daily routes, and calculate delivery earnings",
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a driver account (and log in)
    Register {
        #[arg(long, help = "Full name shown on reports")]
        name: String,

        #[arg(long, short = 'u')]
        username: String,

        #[arg(long, short = 'p')]
        password: String,
    },

    /// Log in as a driver or administrator
    Login {
        #[arg(long, short = 'u')]
        username: String,

        #[arg(long, short = 'p')]
        password: String,

        #[arg(long, help = "Require an administrator account")]
        admin: bool,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Calculate earnings without saving anything
    Quote {
        #[arg(long, default_value = "individual", help = "individual | area (alias: daily)")]
        mode: String,

        #[arg(long, allow_hyphen_values = true, help = "Units (parcels, collections, or the day's parcels)")]
        qty: i64,

        #[arg(long = "type", help = "Individual unit type: parcel | collection")]
        kind: Option<String>,

        #[arg(long = "area-ids", default_value_t = 1, help = "Route IDs covered in area mode")]
        area_ids: u8,
    },

    /// Log a work event
    Add {
        #[arg(long, help = "Business date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, default_value = "individual", help = "individual | area (alias: daily)")]
        mode: String,

        #[arg(long, help = "Route ID")]
        route: String,

        #[arg(long, help = "Second route ID (area mode with --area-ids 2)")]
        route2: Option<String>,

        #[arg(long = "area-ids", default_value_t = 1, help = "Route IDs covered in area mode (1 or 2)")]
        area_ids: u8,

        #[arg(long, allow_hyphen_values = true, help = "Parcels (individual) or the day's parcel count (area)")]
        parcels: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Collections (individual mode)")]
        collections: Option<String>,

        #[arg(long = "photo", value_name = "FILE", help = "Attach a proof photo (repeatable)")]
        photos: Vec<String>,
    },

    /// Show history grouped by month
    List {
        #[arg(long, help = "Only this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, help = "Show another driver's history (admin only)")]
        user: Option<String>,
    },

    /// Current month's total and average per worked day
    Stats {
        #[arg(long, help = "Show another driver's stats (admin only)")]
        user: Option<String>,
    },

    /// Delete a record by ID
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, help = "Month to export (YYYY-MM, default current month)")]
        month: Option<String>,

        #[arg(long, help = "Export another driver's month (admin only)")]
        user: Option<String>,

        #[arg(long, conflicts_with_all = ["month", "user"], help = "Export every record (admin only)")]
        all: bool,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List drivers (admin only)
    Users {
        #[arg(long, default_value = "", help = "Filter by name or username")]
        search: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
