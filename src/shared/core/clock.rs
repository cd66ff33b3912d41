// Source of the current time for the core.
//
// Record ids are epoch milliseconds at creation, so the controller asks a
// Clock instead of calling chrono directly. Tests pin the time with FixedClock.

use chrono::Utc;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
