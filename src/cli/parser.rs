use clap::{Parser, Subcommand};

/// Command-line interface definition for letssleep
/// CLI application to record sleep and wake-up times with SQLite
#[derive(Parser)]
#[command(
    name = "letssleep",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny sleep log: record when you go to sleep and wake up, listed day by day",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show whether you are awake or asleep, and the next quick action
    Status,

    /// Record "went to sleep" now
    Sleep,

    /// Record "woke up" now
    Wake,

    /// Record whichever of sleep/wake comes next
    Toggle,

    /// Add an entry at a chosen time
    Add {
        #[arg(
            long = "at",
            value_name = "WHEN",
            help = "Local time: \"YYYY-MM-DD HH:MM\" or \"HH:MM\" (today). Default: now"
        )]
        at: Option<String>,

        #[arg(
            long = "kind",
            short = 'k',
            help = "sleep | wake (default: sleep)"
        )]
        kind: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Change the time or kind of an existing entry
    Edit {
        /// Entry id, as shown by `list`
        id: i64,

        #[arg(
            long = "at",
            value_name = "WHEN",
            help = "Local time: \"YYYY-MM-DD HH:MM\" or \"HH:MM\" (same day as the entry)"
        )]
        at: Option<String>,

        #[arg(long = "kind", short = 'k', help = "sleep | wake")]
        kind: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete an entry by id
    Del {
        /// Entry id, as shown by `list`
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries grouped by day
    List {
        #[arg(long = "day", value_name = "YYYY-MM-DD", help = "Show a single day")]
        day: Option<String>,

        #[arg(long = "json", help = "Print the day buckets as JSON")]
        json: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
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
}
