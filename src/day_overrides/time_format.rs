use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// A time split the way the 12-hour pickers show it. Hour and minute are
/// zero-padded, both empty when there is no time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TwelveHourTime {
    pub hour: String,
    pub minute: String,
    pub meridiem: Meridiem,
}

/// What to show in place of a missing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyTimeDisplay {
    /// `N/A`
    NotApplicable,
    /// `--:--`
    Placeholder,
}

impl EmptyTimeDisplay {
    fn as_str(self) -> &'static str {
        match self {
            EmptyTimeDisplay::NotApplicable => "N/A",
            EmptyTimeDisplay::Placeholder => "--:--",
        }
    }
}

// "HH:MM" or a bare "HH", where the minute defaults to zero
fn parse_24_hour(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    if time.is_empty() {
        return None;
    }

    let (hour, minute) = time.split_once(':').unwrap_or((time, ""));
    let hour = hour.parse::<u32>().ok()?;
    let minute = if minute.is_empty() {
        0
    } else {
        minute.parse::<u32>().ok()?
    };

    let parsed = NaiveTime::from_hms_opt(hour, minute, 0);
    if parsed.is_none() {
        debug!(time, "time is out of range, treating it as empty");
    }
    parsed
}

/// Splits a 24-hour `HH:MM` time for the 12-hour pickers. Empty or unreadable
/// times give empty fields and `AM`.
pub fn time_24_to_12(time: &str) -> TwelveHourTime {
    let Some(parsed) = parse_24_hour(time) else {
        return TwelveHourTime::default();
    };

    let (is_pm, hour) = parsed.hour12();
    TwelveHourTime {
        hour: format!("{:02}", hour),
        minute: format!("{:02}", parsed.minute()),
        meridiem: if is_pm { Meridiem::Pm } else { Meridiem::Am },
    }
}

/// Joins 12-hour picker values back into `HH:MM`. Returns an empty string
/// when the hour or minute is missing or not a number.
pub fn time_12_to_24(hour: &str, minute: &str, meridiem: Meridiem) -> String {
    if hour.is_empty() || minute.is_empty() {
        return String::new();
    }

    let (Ok(hour), Ok(minute)) = (hour.parse::<u32>(), minute.parse::<u32>()) else {
        return String::new();
    };

    let hour = match meridiem {
        Meridiem::Pm if hour != 12 => hour.saturating_add(12),
        Meridiem::Am if hour == 12 => 0,
        _ => hour,
    };

    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// `"13:30"` becomes `"01:30 PM"`. Empty times show `empty` instead.
pub fn format_time_for_display(time: &str, empty: EmptyTimeDisplay) -> String {
    let twelve_hour = time_24_to_12(time);
    if twelve_hour.hour.is_empty() {
        return empty.as_str().to_string();
    }

    format!(
        "{}:{} {}",
        twelve_hour.hour, twelve_hour.minute, twelve_hour.meridiem
    )
}
