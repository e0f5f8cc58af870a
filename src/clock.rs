//! Wall-clock access for timestamping broadcast alerts.

use chrono::{DateTime, Local};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host's local time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Alert display time, e.g. `03:07 PM`.
pub fn display_time(at: &DateTime<Local>) -> String {
    at.format("%I:%M %p").to_string()
}
