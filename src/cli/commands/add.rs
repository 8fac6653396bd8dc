use super::{apply_picker_flags, finish_picker, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::EditSession;
use crate::errors::AppResult;
use crate::utils::date;

/// Add an entry through the picker: fresh draft, flags, confirm.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { at, kind, yes } = cmd {
        let mut store = open_store(cfg)?;

        let mut session = EditSession::new();
        session.begin_new(&store);

        apply_picker_flags(&mut session, at, kind, date::today())?;
        finish_picker(&mut session, &mut store, cfg, *yes)?;
    }

    Ok(())
}
