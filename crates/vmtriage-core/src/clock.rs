//! Simulated wall clock for receive timestamps.
//!
//! The clock only moves forward. It is confined to the anchor day: an advance
//! that would pass 23:59 stops at 23:59, which keeps the formatted 12-hour
//! timestamps non-decreasing however many records are generated.

use chrono::{NaiveTime, Timelike};
use tracing::warn;

use vmtriage_contracts::record::TIME_RECEIVED_FORMAT;

/// Last representable minute of the anchor day, in minutes since midnight.
const LAST_MINUTE_OF_DAY: u32 = 23 * 60 + 59;

#[derive(Debug, Clone)]
pub struct SimulatedClock {
    minutes_since_midnight: u32,
    saturated: bool,
}

impl SimulatedClock {
    /// Start the clock at `anchor`. Seconds are discarded.
    pub fn starting_at(anchor: NaiveTime) -> Self {
        Self {
            minutes_since_midnight: anchor.hour() * 60 + anchor.minute(),
            saturated: false,
        }
    }

    /// Move the clock forward by `minutes` and return the new time.
    pub fn advance(&mut self, minutes: u32) -> NaiveTime {
        let next = self.minutes_since_midnight.saturating_add(minutes);
        if next > LAST_MINUTE_OF_DAY {
            if !self.saturated {
                warn!(
                    requested_minutes = minutes,
                    "simulated clock reached end of day; holding at 11:59 PM"
                );
            }
            self.saturated = true;
            self.minutes_since_midnight = LAST_MINUTE_OF_DAY;
        } else {
            self.minutes_since_midnight = next;
        }
        self.now()
    }

    /// The current simulated time.
    pub fn now(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(
            self.minutes_since_midnight / 60,
            self.minutes_since_midnight % 60,
            0,
        )
        .unwrap_or_default()
    }

    /// The current time as written to `timeReceived`, e.g. `"08:15 AM"`.
    pub fn stamp(&self) -> String {
        self.now().format(TIME_RECEIVED_FORMAT).to_string()
    }

    /// True once an advance has been clipped at end of day.
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }
}
