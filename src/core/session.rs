//! The add/edit picker.
//!
//! Holds one working copy at a time. Nothing reaches the store until
//! `confirm`; `cancel` throws the working copy away.

use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::event::{EventId, SleepEvent};
use crate::models::event_kind::SleepKind;
use crate::models::status::ButtonCopy;
use chrono::{DateTime, Utc};

/// Value copy of an entry being added or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: SleepKind,
    /// True only for an entry that has never been stored.
    pub is_draft: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    NewDraft(WorkingEntry),
    Editing {
        target: EventId,
        working: WorkingEntry,
    },
}

/// What `confirm` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Committed {
    /// The picker was hidden; nothing to save.
    Idle,
    Created(SleepEvent),
    Updated(SleepEvent),
}

#[derive(Debug, Default)]
pub struct EditSession {
    state: PickerState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, PickerState::Hidden)
    }

    pub fn working(&self) -> Option<&WorkingEntry> {
        match &self.state {
            PickerState::Hidden => None,
            PickerState::NewDraft(w) | PickerState::Editing { working: w, .. } => Some(w),
        }
    }

    fn working_mut(&mut self) -> Option<&mut WorkingEntry> {
        match &mut self.state {
            PickerState::Hidden => None,
            PickerState::NewDraft(w) | PickerState::Editing { working: w, .. } => Some(w),
        }
    }

    /// Id of the stored entry being edited, if any.
    pub fn target(&self) -> Option<EventId> {
        match self.state {
            PickerState::Editing { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Open the picker on a fresh draft: the store's "now", "went to sleep".
    pub fn begin_new(&mut self, store: &EntryStore) {
        self.begin_new_at(store.now());
    }

    pub fn begin_new_at(&mut self, now: DateTime<Utc>) {
        self.state = PickerState::NewDraft(WorkingEntry {
            timestamp: now,
            kind: SleepKind::WentToSleep,
            is_draft: true,
        });
    }

    /// Open the picker on a copy of a stored entry.
    pub fn begin_edit(&mut self, event: &SleepEvent) {
        self.state = PickerState::Editing {
            target: event.id,
            working: WorkingEntry {
                timestamp: event.timestamp,
                kind: event.kind,
                is_draft: false,
            },
        };
    }

    pub fn cancel(&mut self) {
        self.state = PickerState::Hidden;
    }

    pub fn update_working_timestamp(&mut self, timestamp: DateTime<Utc>) {
        if let Some(w) = self.working_mut() {
            w.timestamp = timestamp;
        }
    }

    pub fn update_working_kind(&mut self, kind: SleepKind) {
        if let Some(w) = self.working_mut() {
            w.kind = kind;
        }
    }

    /// Write the working copy back into the store.
    ///
    /// On success, and on `NotFound` (the target vanished while the picker was
    /// open), the picker closes. On any other failure it stays open with the
    /// working copy untouched.
    pub fn confirm(&mut self, store: &mut EntryStore) -> AppResult<Committed> {
        let state = std::mem::take(&mut self.state);

        let result = match &state {
            PickerState::Hidden => Ok(Committed::Idle),
            PickerState::NewDraft(w) => store.create_event(w.timestamp, w.kind).map(Committed::Created),
            PickerState::Editing { target, working } => store
                .update_event(*target, working.timestamp, working.kind)
                .map(Committed::Updated),
        };

        if let Err(e) = &result
            && !e.is_not_found()
        {
            self.state = state;
        }

        result
    }

    /// Label of the confirm button: drafts are "added", edits "confirmed".
    pub fn confirm_label(&self) -> Option<&'static str> {
        match &self.state {
            PickerState::Hidden => None,
            PickerState::NewDraft(_) => Some(ButtonCopy::ADD),
            PickerState::Editing { .. } => Some(ButtonCopy::CONFIRM),
        }
    }

    pub fn cancel_label(&self) -> Option<&'static str> {
        self.is_visible().then_some(ButtonCopy::CANCEL)
    }
}
