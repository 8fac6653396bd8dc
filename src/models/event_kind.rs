use serde::{Deserialize, Serialize};

use super::status::SleepStatus;

/// What a recorded entry says happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepKind {
    WentToSleep,
    WokeUp,
}

impl SleepKind {
    pub const ALL: [SleepKind; 2] = [SleepKind::WentToSleep, SleepKind::WokeUp];

    /// Human readable label, as shown next to each entry.
    pub fn label(&self) -> &'static str {
        match self {
            SleepKind::WentToSleep => "Went to sleep",
            SleepKind::WokeUp => "Woke up",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SleepKind::WentToSleep => "🛏️",
            SleepKind::WokeUp => "🌅",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SleepKind::WentToSleep => "went_to_sleep",
            SleepKind::WokeUp => "woke_up",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "went_to_sleep" => Some(SleepKind::WentToSleep),
            "woke_up" => Some(SleepKind::WokeUp),
            _ => None,
        }
    }

    /// Helper: convert a code typed on the command line (any case).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "sleep" | "s" | "went_to_sleep" | "went-to-sleep" => Some(SleepKind::WentToSleep),
            "wake" | "w" | "woke_up" | "woke-up" => Some(SleepKind::WokeUp),
            _ => None,
        }
    }

    /// The status the system is in right after this kind of entry.
    pub fn resulting_status(&self) -> SleepStatus {
        match self {
            SleepKind::WentToSleep => SleepStatus::Asleep,
            SleepKind::WokeUp => SleepStatus::Awake,
        }
    }
}
