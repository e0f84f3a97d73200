use rand::Rng;
use std::collections::HashSet;

/// Candidate entries eligible to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pool {
    Names(Vec<String>),
    /// Inclusive integer range. Empty when `max < min`.
    Range { min: i64, max: i64 },
}

impl Pool {
    /// Number of entries in the pool. Ranges larger than `usize::MAX`
    /// saturate.
    pub fn len(&self) -> usize {
        match self {
            Pool::Names(names) => names.len(),
            Pool::Range { min, max } => range_len(*min, *max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact number of entries. Unlike [`Pool::len`] this does not saturate,
    /// so the full `i64` range reports 2^64.
    pub fn span(&self) -> u128 {
        match self {
            Pool::Names(names) => names.len() as u128,
            Pool::Range { min, max } => range_span(*min, *max),
        }
    }

    /// Entry at position `index`, rendered as it is shown to the user.
    pub fn entry(&self, index: usize) -> Option<String> {
        match self {
            Pool::Names(names) => names.get(index).cloned(),
            Pool::Range { min, max } => {
                let value = *min as i128 + index as i128;
                if index < self.len() && value <= *max as i128 {
                    Some(value.to_string())
                } else {
                    None
                }
            }
        }
    }

    /// Pick one entry uniformly at random, with replacement.
    pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        match self {
            Pool::Names(names) if !names.is_empty() => {
                names.get(rng.gen_range(0..names.len())).cloned()
            }
            Pool::Range { min, max } if max >= min => Some(rng.gen_range(*min..=*max).to_string()),
            _ => None,
        }
    }
}

fn range_span(min: i64, max: i64) -> u128 {
    if max < min {
        return 0;
    }
    (max as i128 - min as i128 + 1) as u128
}

fn range_len(min: i64, max: i64) -> usize {
    usize::try_from(range_span(min, max)).unwrap_or(usize::MAX)
}

/// Split raw input on newlines and commas, trimming each entry and dropping
/// empty ones.
pub fn parse_names(text: &str) -> Vec<String> {
    text.split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Append `incoming` to `existing`, removing duplicates across both lists.
///
/// First-seen order wins, so existing names keep their position and new names
/// follow in the order they were produced.
pub fn merge_names<I>(existing: &[String], incoming: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(existing.len());
    for name in existing.iter().cloned().chain(incoming) {
        let name = name.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            out.push(name);
        }
    }
    out
}
