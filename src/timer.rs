use std::time::{Duration, Instant};

/// Fixed-rate tick schedule. The main loop waits on input for
/// `time_until_tick()` and runs a game step whenever the timer is due.
pub struct TickTimer {
    interval: Duration,
    next_tick: Instant,
}

impl TickTimer {
    /// The first tick is due right away.
    pub fn new(interval: Duration) -> Self {
        TickTimer { interval, next_tick: Instant::now() }
    }

    pub fn time_until_tick(&self) -> Duration {
        self.next_tick.saturating_duration_since(Instant::now())
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.next_tick
    }

    /// Schedules the next tick one interval from now.
    pub fn advance(&mut self) {
        self.next_tick = Instant::now() + self.interval;
    }
}
