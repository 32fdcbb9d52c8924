//! Cross-crate scenarios over the evidence library and the TUI front end.

pub mod evidence;
pub mod flows;

use chrono::{DateTime, Local, TimeZone};

/// Fixed generation time so reports compare byte-for-byte.
pub fn fixed_time(hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 6, 12, hour, minute, 0)
        .single()
        .unwrap_or_else(Local::now)
}
