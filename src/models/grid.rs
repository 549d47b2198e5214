//! Fixed daily time grid.
//!
//! Every generated day follows the same layout: one-hour periods on a
//! clock that runs from 09:00 to 17:00, with a single 20-minute break
//! starting at 13:00. The break occupies one clock tick and never counts
//! against the period budget.
//!
//! | Hour | Content |
//! |------|---------|
//! | 9–12 | teaching periods 1–4 |
//! | 13 | break (13:00 - 13:20) |
//! | 14–16 | teaching periods 5–7 |

use serde::{Deserialize, Serialize};
use std::fmt;

/// First clock hour of the day.
pub const FIRST_HOUR: u8 = 9;
/// Last clock hour at which a period may start.
pub const LAST_HOUR: u8 = 16;
/// Clock hour reserved for the break.
pub const BREAK_HOUR: u8 = 13;
/// Break length in minutes.
pub const BREAK_MINUTES: u8 = 20;
/// Largest accepted period count per day.
pub const MAX_PERIODS: usize = 8;

/// A labelled time range within a day, `[start, end)`.
///
/// Rendered as `"9:00 - 10:00"` (or `"13:00 - 13:20"` for the break).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start hour (24h clock).
    pub start_hour: u8,
    /// Start minute.
    pub start_minute: u8,
    /// End hour (24h clock).
    pub end_hour: u8,
    /// End minute.
    pub end_minute: u8,
}

impl TimeRange {
    /// A full teaching period starting at `hour`.
    pub fn period(hour: u8) -> Self {
        Self {
            start_hour: hour,
            start_minute: 0,
            end_hour: hour + 1,
            end_minute: 0,
        }
    }

    /// The fixed midday break.
    pub fn break_time() -> Self {
        Self {
            start_hour: BREAK_HOUR,
            start_minute: 0,
            end_hour: BREAK_HOUR,
            end_minute: BREAK_MINUTES,
        }
    }

    /// Length of the range in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        let start = self.start_hour as u32 * 60 + self.start_minute as u32;
        let end = self.end_hour as u32 * 60 + self.end_minute as u32;
        end.saturating_sub(start)
    }

    /// Whether this is the fixed break range.
    #[inline]
    pub fn is_break(&self) -> bool {
        *self == Self::break_time()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02} - {}:{:02}",
            self.start_hour, self.start_minute, self.end_hour, self.end_minute
        )
    }
}

/// One tick of the daily clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTick {
    /// A teaching period starting at the given hour.
    Period(u8),
    /// The midday break.
    Break,
}

impl GridTick {
    /// Time range covered by this tick.
    pub fn time_range(&self) -> TimeRange {
        match *self {
            GridTick::Period(hour) => TimeRange::period(hour),
            GridTick::Break => TimeRange::break_time(),
        }
    }
}

/// Walks the daily clock from [`FIRST_HOUR`] to [`LAST_HOUR`] inclusive.
pub fn daily_ticks() -> impl Iterator<Item = GridTick> {
    (FIRST_HOUR..=LAST_HOUR).map(|hour| {
        if hour == BREAK_HOUR {
            GridTick::Break
        } else {
            GridTick::Period(hour)
        }
    })
}

/// Number of teaching periods the clock can hold in one day.
pub fn teaching_capacity() -> usize {
    daily_ticks()
        .filter(|t| matches!(t, GridTick::Period(_)))
        .count()
}
