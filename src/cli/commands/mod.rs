pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod quick;
pub mod status;

use crate::config::Config;
use crate::core::session::EditSession;
use crate::core::store::{EntryStore, StoreChange};
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::SleepKind;
use crate::models::status::ButtonCopy;
use crate::ui::messages::{ask_confirmation, info, success, warning};
use crate::utils::date::parse_when;
use crate::utils::describe_entry;
use chrono::NaiveDate;

/// Open the configured store with a subscriber that reports every change.
pub(crate) fn open_store(cfg: &Config) -> AppResult<EntryStore> {
    let mut store = EntryStore::open(&cfg.database)?;

    let date_fmt = cfg.date_format.clone();
    let time_fmt = cfg.time_format.clone();
    store.subscribe(move |change| {
        let ev = change.event();
        let what = describe_entry(ev.kind, &ev.timestamp, &date_fmt, &time_fmt);
        match change {
            StoreChange::Created(_) => success(format!("Added #{}: {}", ev.id, what)),
            StoreChange::Updated { .. } => success(format!("Updated #{}: {}", ev.id, what)),
            StoreChange::Deleted(_) => success(format!("Deleted #{}: {}", ev.id, what)),
        }
    });

    Ok(store)
}

pub(crate) fn parse_kind(code: &str) -> AppResult<SleepKind> {
    SleepKind::from_code(code).ok_or_else(|| {
        AppError::InvalidKind(format!(
            "'{}'. Use 'sleep' (went to sleep) or 'wake' (woke up)",
            code
        ))
    })
}

/// Apply `--at` / `--kind` to the picker's working copy.
pub(crate) fn apply_picker_flags(
    session: &mut EditSession,
    at: &Option<String>,
    kind: &Option<String>,
    base_day: NaiveDate,
) -> AppResult<()> {
    if let Some(when) = at {
        session.update_working_timestamp(parse_when(when, base_day)?);
    }
    if let Some(code) = kind {
        session.update_working_kind(parse_kind(code)?);
    }
    Ok(())
}

/// Show the working copy, ask for confirmation, then confirm or cancel.
///
/// A target deleted in the meantime is reported and swallowed.
pub(crate) fn finish_picker(
    session: &mut EditSession,
    store: &mut EntryStore,
    cfg: &Config,
    yes: bool,
) -> AppResult<()> {
    let Some(working) = session.working().cloned() else {
        return Ok(());
    };

    let preview = describe_entry(
        working.kind,
        &working.timestamp,
        &cfg.date_format,
        &cfg.time_format,
    );
    let title = match session.target() {
        Some(id) => format!("Entry #{id} → {preview}"),
        None => format!("New entry: {preview}"),
    };

    let confirmed = yes
        || !cfg.confirm_changes
        || ask_confirmation(
            &title,
            session.confirm_label().unwrap_or(ButtonCopy::CONFIRM),
            ButtonCopy::CANCEL,
        );

    if !confirmed {
        session.cancel();
        info("Cancelled. Nothing was saved.");
        return Ok(());
    }

    match session.confirm(store) {
        Ok(_) => Ok(()),
        Err(AppError::NotFound(id)) => {
            warning(format!("Entry #{id} no longer exists; nothing was saved."));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
