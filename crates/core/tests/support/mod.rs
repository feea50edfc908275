//! Shared test helpers for `routine-core` integration tests.
//!
//! These helpers provide a scripted text generator and a fixed clock so the
//! planner tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod generator;

use chrono::{DateTime, FixedOffset, TimeZone};
use routine_core::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// 2026-10-17 08:00 at UTC+9.
    pub fn kst_morning() -> Self {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        Self(kst.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap())
    }

    /// 2026-10-17 20:00 at UTC-7, when it is already the 18th at UTC+9.
    pub fn pacific_evening() -> Self {
        let pdt = FixedOffset::west_opt(7 * 3600).unwrap();
        Self(pdt.with_ymd_and_hms(2026, 10, 17, 20, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
