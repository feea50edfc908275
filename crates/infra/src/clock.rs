//! Wall-clock adapter for the core `Clock` port

use chrono::{DateTime, FixedOffset, Local};
use routine_core::Clock;

/// Process-local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
