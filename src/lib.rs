//! letssleep library root.
//! Exposes the entry store, the edit session, the day grouping and the CLI
//! front end built on top of them.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

pub use crate::core::session::{Committed, EditSession, PickerState, WorkingEntry};
pub use crate::core::store::{EntryStore, StoreChange, SubscriptionId};
pub use errors::AppError;
pub use models::{
    day_bucket::DayBucket,
    event::{EventId, SleepEvent},
    event_kind::SleepKind,
    status::{QuickAction, SleepStatus},
};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(&cli.command, cfg),
        Commands::Sleep | Commands::Wake | Commands::Toggle => {
            cli::commands::quick::handle(&cli.command, cfg)
        }
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed down
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = expand_tilde(custom_db).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
