use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventId;
use crate::ui::messages::{ask_confirmation, info, warning};
use crate::utils::describe_entry;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;
        let id = EventId(*id);

        let ev = match store.get_event(id) {
            Ok(ev) => ev,
            Err(AppError::NotFound(_)) => {
                warning(format!("Entry #{id} does not exist; nothing to delete."));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete entry #{} ({})? This action is irreversible.",
            id,
            describe_entry(ev.kind, &ev.timestamp, &cfg.date_format, &cfg.time_format)
        );

        if !*yes && cfg.confirm_changes && !ask_confirmation(&prompt, "Delete", "Cancel") {
            info("Operation cancelled.");
            return Ok(());
        }

        match store.delete_event(id) {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => {
                warning(format!("Entry #{id} was already gone."));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
