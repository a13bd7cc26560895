/// ANSI color helper utilities for terminal output.
use crate::models::class::SlotState;
use crate::models::status::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::Late => YELLOW,
        AttendanceStatus::Absent => RED,
    }
}

pub fn colorize_status(status: AttendanceStatus) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}

pub fn colorize_slot(state: SlotState) -> String {
    let color = match state {
        SlotState::Current => GREEN,
        SlotState::Upcoming => BLUE,
        SlotState::Completed => GREY,
    };
    format!("{}{}{}", color, state.as_str(), RESET)
}

/// Greys out empty placeholders such as "--:--".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Rate colour: ≥ 80 green, ≥ 50 yellow, otherwise red.
pub fn color_for_rate(rate: u32) -> &'static str {
    if rate >= 80 {
        GREEN
    } else if rate >= 50 {
        YELLOW
    } else {
        RED
    }
}
