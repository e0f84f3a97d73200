use crate::pool::Pool;
use crate::ticker::Ticker;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub const DEFAULT_ROLL_TICKS: u32 = 30;
pub const DEFAULT_ROLL_INTERVAL: Duration = Duration::from_millis(80);

/// Select `quantity` entries of `pool` without replacement, in random order.
///
/// Sampling goes through indices so numeric ranges are never materialised.
/// Ranges wider than `usize` are sampled by value instead. `quantity` is
/// capped at the pool size.
pub fn draw_winners<R: Rng + ?Sized>(pool: &Pool, quantity: usize, rng: &mut R) -> Vec<String> {
    if let Pool::Range { min, max } = *pool {
        if pool.span() > usize::MAX as u128 {
            return sample_range(min, max, quantity, rng);
        }
    }
    let len = pool.len();
    let amount = quantity.min(len);
    index::sample(rng, len, amount)
        .into_iter()
        .filter_map(|i| pool.entry(i))
        .collect()
}

/// Distinct values of `min..=max` by rejection. Only used when the span does
/// not fit an index, so `amount` is always far below the span.
fn sample_range<R: Rng + ?Sized>(min: i64, max: i64, amount: usize, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::with_capacity(amount);
    let mut out = Vec::with_capacity(amount);
    while out.len() < amount {
        let value = rng.gen_range(min..=max);
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    /// Preview phase. `tick` counts elapsed ticks, `preview` is the value
    /// currently flashing on screen.
    Rolling { tick: u32, preview: Option<String> },
    Revealed { winners: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEvent {
    Rolled(String),
    Revealed(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRejected {
    InProgress,
    EmptyPool,
    InvalidQuantity,
}

impl std::fmt::Display for DrawRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawRejected::InProgress => write!(f, "a draw is already in progress"),
            DrawRejected::EmptyPool => write!(f, "the pool is empty"),
            DrawRejected::InvalidQuantity => write!(f, "quantity is out of range"),
        }
    }
}

impl std::error::Error for DrawRejected {}

struct PendingDraw {
    pool: Pool,
    quantity: usize,
}

/// Drives a draw from trigger through the rolling preview to the reveal.
pub struct DrawEngine {
    state: DrawState,
    ticker: Ticker,
    roll_ticks: u32,
    pending: Option<PendingDraw>,
    rng: StdRng,
}

impl DrawEngine {
    pub fn new(roll_interval: Duration, roll_ticks: u32) -> Self {
        Self::with_rng(roll_interval, roll_ticks, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed (useful for deterministic tests).
    pub fn from_seed(roll_interval: Duration, roll_ticks: u32, seed: u64) -> Self {
        Self::with_rng(roll_interval, roll_ticks, StdRng::seed_from_u64(seed))
    }

    fn with_rng(roll_interval: Duration, roll_ticks: u32, rng: StdRng) -> Self {
        Self {
            state: DrawState::Idle,
            ticker: Ticker::new(roll_interval),
            roll_ticks: roll_ticks.max(1),
            pending: None,
            rng,
        }
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self.state, DrawState::Rolling { .. })
    }

    pub fn preview(&self) -> Option<&str> {
        match &self.state {
            DrawState::Rolling { preview, .. } => preview.as_deref(),
            _ => None,
        }
    }

    pub fn winners(&self) -> &[String] {
        match &self.state {
            DrawState::Revealed { winners } => winners,
            _ => &[],
        }
    }

    /// Time until the next rolling tick, if a draw is in progress.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.until_next(now)
    }

    /// Begin a draw. The pool and quantity are snapshotted so later edits
    /// do not affect the result.
    pub fn start(&mut self, pool: &Pool, quantity: usize, now: Instant) -> Result<(), DrawRejected> {
        if self.is_rolling() {
            return Err(DrawRejected::InProgress);
        }
        if pool.is_empty() {
            return Err(DrawRejected::EmptyPool);
        }
        if quantity == 0 || quantity > pool.len() {
            return Err(DrawRejected::InvalidQuantity);
        }
        self.pending = Some(PendingDraw {
            pool: pool.clone(),
            quantity,
        });
        self.state = DrawState::Rolling {
            tick: 0,
            preview: None,
        };
        self.ticker.start(now);
        tracing::info!(pool_size = pool.len(), quantity, "draw started");
        Ok(())
    }

    /// Advance the rolling phase to `now`.
    ///
    /// Returns the last event produced, if any tick fell due. Several due ticks
    /// are consumed at once so the total rolling time stays fixed.
    pub fn poll(&mut self, now: Instant) -> Option<DrawEvent> {
        let due = self.ticker.due(now);
        if due == 0 {
            return None;
        }
        let DrawState::Rolling { tick, .. } = self.state else {
            self.ticker.stop();
            return None;
        };
        let tick = tick.saturating_add(due).min(self.roll_ticks);
        if tick >= self.roll_ticks {
            return self.finish();
        }
        let preview = match &self.pending {
            Some(pending) => pending.pool.sample_one(&mut self.rng),
            None => None,
        };
        self.state = DrawState::Rolling {
            tick,
            preview: preview.clone(),
        };
        preview.map(DrawEvent::Rolled)
    }

    fn finish(&mut self) -> Option<DrawEvent> {
        self.ticker.stop();
        let Some(pending) = self.pending.take() else {
            self.state = DrawState::Idle;
            return None;
        };
        let winners = draw_winners(&pending.pool, pending.quantity, &mut self.rng);
        tracing::info!(count = winners.len(), "draw revealed");
        tracing::debug!(?winners, "winners");
        self.state = DrawState::Revealed {
            winners: winners.clone(),
        };
        Some(DrawEvent::Revealed(winners))
    }

    /// Cancel any rolling draw and forget the last result.
    pub fn reset(&mut self) {
        self.ticker.stop();
        self.pending = None;
        self.state = DrawState::Idle;
    }
}
