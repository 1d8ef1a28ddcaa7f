//! Time source for record ids and creation timestamps.

use std::cell::Cell;

use chrono::{DateTime, Local, TimeZone, Utc};

/// `toLocaleString`-style timestamp, e.g. `3/17/2025, 9:05:00 AM`
pub const CREATED_AT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;

    /// Current local time formatted for display
    fn display_now(&self) -> String;
}

/// Wall clock. On wasm32 chrono reads time and offset from the JS `Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
    }

    fn display_now(&self) -> String {
        Local::now().format(CREATED_AT_FORMAT).to_string()
    }
}

/// Clock pinned to a settable instant, formatted in UTC.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: Cell<u64>,
}

impl FixedClock {
    pub fn new(millis: u64) -> Self {
        Self { millis: Cell::new(millis) }
    }

    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.get()
    }

    fn display_now(&self) -> String {
        let millis = i64::try_from(self.millis.get()).unwrap_or(i64::MAX);
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|dt: DateTime<Utc>| dt.format(CREATED_AT_FORMAT).to_string())
            .unwrap_or_default()
    }
}
