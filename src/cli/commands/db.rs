use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        if !(*migrate || *check || *vacuum || *show_info) {
            info("Use --migrate, --info, --check or --vacuum.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            info("Running migrations…");
            let applied = run_pending_migrations(&pool.conn)?;
            if applied.is_empty() {
                info("Nothing to migrate.");
            }
            for notice in applied {
                success(notice);
            }
            success("Migration completed.");
        }

        //
        // 2) INFO
        //
        if *show_info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            info("Running integrity check…");

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
