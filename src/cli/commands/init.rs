use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Cli;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    println!("⚙️  Initializing letssleep…");
    println!("🗄️  Database   : {}", &cfg.database);

    let conn = Connection::open(&cfg.database)?;
    for notice in init_db(&conn)? {
        success(notice);
    }

    success(format!("Database initialized at {}", &cfg.database));

    // internal log is best effort
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
