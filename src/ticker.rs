use std::time::{Duration, Instant};

/// Repeating deadline schedule polled from the UI frame loop.
///
/// The ticker never spawns anything. Callers ask how many ticks fell due
/// since the last poll and repaint at [`Ticker::until_next`].
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    /// Arm the ticker. The first tick falls one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next_due else {
            return 0;
        };
        if now < next {
            return 0;
        }
        let interval = self.interval.as_nanos();
        let behind = (now - next).as_nanos();
        let rem = (behind % interval) as u64;
        self.next_due = Some(now + self.interval - Duration::from_nanos(rem));
        u32::try_from(behind / interval + 1).unwrap_or(u32::MAX)
    }

    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|next| next.saturating_duration_since(now))
    }
}
