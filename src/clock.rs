use std::time::{Duration, Instant};

/// Fixed-period tick source. Ticks stay on a fixed grid so frame jitter does
/// not slow the rate; a poll more than a full period late fires once and
/// drops the missed periods.
pub struct TickClock {
    period: Duration,
    last_tick: Instant,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last_tick: start,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.period {
            self.last_tick += self.period;
            if now.saturating_duration_since(self.last_tick) >= self.period {
                self.last_tick = now;
            }
            true
        } else {
            false
        }
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
