//! ANSI color helper utilities for terminal output.
use crate::models::status::SleepStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Status color:
/// asleep → blue
/// awake → yellow
/// undefined → grey
pub fn color_for_status(status: SleepStatus) -> &'static str {
    match status {
        SleepStatus::Asleep => BLUE,
        SleepStatus::Awake => YELLOW,
        SleepStatus::Undefined => GREY,
    }
}

pub fn colorize_status(status: SleepStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}
