use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event_kind::SleepKind;

/// One-tap entries: `sleep`, `wake` and `toggle`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match cmd {
        Commands::Sleep => {
            store.create_quick_event(SleepKind::WentToSleep)?;
        }
        Commands::Wake => {
            store.create_quick_event(SleepKind::WokeUp)?;
        }
        Commands::Toggle => {
            store.toggle()?;
        }
        _ => {}
    }

    Ok(())
}
