use crate::pool::{merge_names, parse_names, Pool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Names,
    Numbers,
}

/// Form state behind the raffle window.
///
/// Every setter re-clamps the winner quantity so it always lies in
/// `1..=max_quantity()`.
#[derive(Debug, Clone)]
pub struct Raffle {
    mode: Mode,
    names_text: String,
    names: Vec<String>,
    range_min: i64,
    range_max: i64,
    quantity: usize,
}

impl Default for Raffle {
    fn default() -> Self {
        Self::with_range(1, 100)
    }
}

impl Raffle {
    pub fn with_range(min: i64, max: i64) -> Self {
        Self {
            mode: Mode::Names,
            names_text: String::new(),
            names: Vec::new(),
            range_min: min,
            range_max: max,
            quantity: 1,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn names_text(&self) -> &str {
        &self.names_text
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn range(&self) -> (i64, i64) {
        (self.range_min, self.range_max)
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.clamp_quantity();
    }

    /// Replace the raw name text and reparse the list.
    pub fn set_names_text(&mut self, text: impl Into<String>) {
        self.names_text = text.into();
        self.names = parse_names(&self.names_text);
        self.clamp_quantity();
    }

    pub fn set_range(&mut self, min: i64, max: i64) {
        self.range_min = min;
        self.range_max = max;
        self.clamp_quantity();
    }

    /// The pool for the active mode.
    pub fn pool(&self) -> Pool {
        match self.mode {
            Mode::Names => Pool::Names(self.names.clone()),
            Mode::Numbers => Pool::Range {
                min: self.range_min,
                max: self.range_max,
            },
        }
    }

    /// Size of the active pool. An inverted range reports 0.
    pub fn pool_size(&self) -> usize {
        match self.mode {
            Mode::Names => self.names.len(),
            Mode::Numbers => Pool::Range {
                min: self.range_min,
                max: self.range_max,
            }
            .len(),
        }
    }

    /// Exact size of the active pool, for display.
    pub fn pool_span(&self) -> u128 {
        match self.mode {
            Mode::Names => self.names.len() as u128,
            Mode::Numbers => Pool::Range {
                min: self.range_min,
                max: self.range_max,
            }
            .span(),
        }
    }

    pub fn max_quantity(&self) -> usize {
        self.pool_size().max(1)
    }

    pub fn can_draw(&self) -> bool {
        self.pool_size() > 0
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.max_quantity()
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    pub fn increment_quantity(&mut self) {
        if self.can_increment() {
            self.quantity += 1;
        }
    }

    pub fn decrement_quantity(&mut self) {
        if self.can_decrement() {
            self.quantity -= 1;
        }
    }

    /// Empty the name list and reset the quantity. The range is kept.
    pub fn clear_names(&mut self) {
        self.names_text.clear();
        self.names.clear();
        self.quantity = 1;
    }

    /// Merge generated names into the list. Returns how many were new.
    pub fn import_names(&mut self, generated: Vec<String>) -> usize {
        let before = self.names.len();
        self.names = merge_names(&self.names, generated);
        self.names_text = self.names.join("\n");
        self.clamp_quantity();
        self.names.len().saturating_sub(before)
    }

    fn clamp_quantity(&mut self) {
        let max = self.max_quantity();
        if self.quantity > max {
            self.quantity = max;
        } else if self.quantity == 0 {
            self.quantity = 1;
        }
    }
}
