use serde::Serialize;

use super::event_kind::SleepKind;

/// Derived awake/asleep state of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepStatus {
    /// No first entry yet.
    Undefined,
    Awake,
    Asleep,
}

impl SleepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SleepStatus::Undefined => "No entries yet",
            SleepStatus::Awake => "Awake",
            SleepStatus::Asleep => "Asleep",
        }
    }

    /// The quick action offered while in this status.
    pub fn next_action(&self) -> QuickAction {
        match self {
            SleepStatus::Undefined => QuickAction::AddFirstEntry,
            SleepStatus::Awake => QuickAction::GoToSleep,
            SleepStatus::Asleep => QuickAction::WakeUp,
        }
    }
}

/// The context-sensitive button next to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    AddFirstEntry,
    GoToSleep,
    WakeUp,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AddFirstEntry => ButtonCopy::ADD_FIRST_ENTRY,
            QuickAction::GoToSleep => ButtonCopy::GO_TO_SLEEP,
            QuickAction::WakeUp => ButtonCopy::WAKE_UP,
        }
    }

    /// Kind recorded by the one-tap flow. `AddFirstEntry` opens the picker instead.
    pub fn quick_kind(&self) -> Option<SleepKind> {
        match self {
            QuickAction::AddFirstEntry => None,
            QuickAction::GoToSleep => Some(SleepKind::WentToSleep),
            QuickAction::WakeUp => Some(SleepKind::WokeUp),
        }
    }
}

pub struct ButtonCopy;

impl ButtonCopy {
    pub const ADD_FIRST_ENTRY: &'static str = "Add first entry";
    pub const GO_TO_SLEEP: &'static str = "Go to sleep";
    pub const WAKE_UP: &'static str = "Wake up";
    pub const ADD: &'static str = "Add";
    pub const CONFIRM: &'static str = "Confirm";
    pub const CANCEL: &'static str = "Cancel";
}
