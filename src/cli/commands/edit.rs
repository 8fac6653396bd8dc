use super::{apply_picker_flags, finish_picker, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::EditSession;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventId;
use crate::ui::messages::{info, warning};

/// Edit an entry through the picker: copy, flags, confirm.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, at, kind, yes } = cmd {
        let mut store = open_store(cfg)?;

        let target = match store.get_event(EventId(*id)) {
            Ok(ev) => ev,
            Err(AppError::NotFound(id)) => {
                warning(format!("Entry #{id} does not exist."));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if at.is_none() && kind.is_none() {
            info("Nothing to change: pass --at and/or --kind.");
            return Ok(());
        }

        let mut session = EditSession::new();
        session.begin_edit(&target);

        // "HH:MM" keeps the entry on its own day
        let base_day = target.local_timestamp().date_naive();
        apply_picker_flags(&mut session, at, kind, base_day)?;
        finish_picker(&mut session, &mut store, cfg, *yes)?;
    }

    Ok(())
}
