//! Uniform random pattern selection excluding the current card

use crate::catalog::PatternRecord;
use crate::selection::random::RandomSource;

/// Pick one enabled pattern uniformly at random, skipping `exclude_id`
///
/// Returns `None` when no candidate is left, which covers an empty enabled
/// set and a single enabled pattern equal to `exclude_id`. That is the
/// "no valid pattern" state, not an error.
pub fn pick<'a>(
    enabled: &[&'a PatternRecord],
    exclude_id: Option<&str>,
    random: &mut impl RandomSource,
) -> Option<&'a PatternRecord> {
    let candidates: Vec<&'a PatternRecord> = enabled
        .iter()
        .copied()
        .filter(|record| exclude_id != Some(record.id.as_str()))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let ratio = random.next_ratio();
    let index = (ratio * candidates.len() as f64).floor() as usize;

    // A source returning exactly 1.0 would index past the end
    candidates
        .get(index)
        .or_else(|| candidates.last())
        .copied()
}

/// Pattern picker owning its random source
#[derive(Debug, Clone)]
pub struct Selector<R: RandomSource> {
    random: R,
}

impl<R: RandomSource> Selector<R> {
    /// Create a selector drawing from `random`
    pub const fn new(random: R) -> Self {
        Self { random }
    }

    /// Pick one enabled pattern, skipping `exclude_id`; see [`pick`]
    pub fn pick<'a>(
        &mut self,
        enabled: &[&'a PatternRecord],
        exclude_id: Option<&str>,
    ) -> Option<&'a PatternRecord> {
        pick(enabled, exclude_id, &mut self.random)
    }
}
