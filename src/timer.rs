use std::time::{Duration, Instant};

/// Countdown for an active quiz. Starts running as soon as it is created
/// and never pauses; the main loop checks `is_finished` on every tick and
/// forces the score screen when time runs out.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    started: Instant,
    total: Duration,
}

impl Countdown {
    pub fn new(total: Duration) -> Self {
        Self {
            started: Instant::now(),
            total,
        }
    }

    pub fn minutes(minutes: u64) -> Self {
        Self::new(Duration::from_secs(minutes * 60))
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn remaining(&self) -> Duration {
        self.total.saturating_sub(self.started.elapsed())
    }

    /// Time spent so far, capped at the total once the countdown is over.
    pub fn elapsed(&self) -> Duration {
        self.total - self.remaining()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining().is_zero()
    }

    /// MM:SS label for the quiz header.
    pub fn clock(&self) -> String {
        format_clock(self.remaining())
    }

    /// Last minute of the countdown, when the clock turns urgent.
    pub fn is_low(&self) -> bool {
        self.remaining() < Duration::from_secs(60)
    }
}

pub fn format_clock(duration: Duration) -> String {
    let seconds = duration.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
