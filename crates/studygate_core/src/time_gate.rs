use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected HH:MM, got {0:?}")]
    Format(String),
    #[error("hour {0} out of range 0-23")]
    Hour(u32),
    #[error("minute {0} out of range 0-59")]
    Minute(u32),
}

/// Wall-clock time of day at minute resolution.
///
/// Ordering is lexicographic on `(hour, minute)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::Minute(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Parses the `HH:MM` value produced by a time picker.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let format_err = || TimeParseError::Format(raw.to_string());
        let (hour, minute) = raw.trim().split_once(':').ok_or_else(format_err)?;
        let parse_part = |part: &str| -> Result<u32, TimeParseError> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format_err());
            }
            part.parse().map_err(|_| format_err())
        };
        Self::new(parse_part(hour)?, parse_part(minute)?)
    }
}

/// Daily study window, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

pub const DEFAULT_WINDOW_START: ClockTime = ClockTime { hour: 9, minute: 0 };
pub const DEFAULT_WINDOW_END: ClockTime = ClockTime {
    hour: 17,
    minute: 0,
};

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
        }
    }
}

/// True when `now` falls inside `[window.start, window.end)`.
///
/// Same-day comparison only: a window with `end <= start` never blocks.
pub fn is_blocked(now: ClockTime, window: &TimeWindow) -> bool {
    now >= window.start && now < window.end
}
