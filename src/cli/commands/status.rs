use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, colorize_status};
use crate::utils::describe_entry;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Status) {
        let store = EntryStore::open(&cfg.database)?;
        let status = store.current_status()?;

        println!("{}Status:{} {}", CYAN, RESET, colorize_status(status));

        if let Some(last) = store.latest_event()? {
            println!(
                "{}Last:{}   {}",
                CYAN,
                RESET,
                describe_entry(last.kind, &last.timestamp, &cfg.date_format, &cfg.time_format)
            );
        }

        println!("{}Next:{}   {}", CYAN, RESET, status.next_action().label());
    }

    Ok(())
}
