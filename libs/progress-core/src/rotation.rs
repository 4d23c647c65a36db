//! Per-unit word rotation.
//!
//! A unit cycles through its words: each pull favours words not yet seen in
//! the current cycle, and once the pool is exhausted the unit is reset and a
//! new cycle starts. The tracker lives in memory only and starts empty in
//! every process.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{RotationPolicy, UnitProgress, UnitRotationState, WordRef};

/// Process-scoped rotation state for every unit.
#[derive(Debug)]
pub struct UnitRotationTracker<R = StdRng> {
    units: HashMap<String, UnitRotationState>,
    policy: RotationPolicy,
    rng: R,
}

impl UnitRotationTracker<StdRng> {
    /// Tracker seeded from OS entropy.
    pub fn new(policy: RotationPolicy) -> Self {
        Self::with_rng(policy, StdRng::from_entropy())
    }
}

impl<R: Rng> UnitRotationTracker<R> {
    pub fn with_rng(policy: RotationPolicy, rng: R) -> Self {
        Self {
            units: HashMap::new(),
            policy,
            rng,
        }
    }

    /// Create state for `unit` unless it already exists.
    ///
    /// The unit's size is fixed by the first call; later calls keep progress.
    /// Returns true if the unit was created.
    pub fn initialize_unit(&mut self, words: &[WordRef], unit: &str) -> bool {
        if self.units.contains_key(unit) {
            return false;
        }
        let total_words = words.iter().filter(|w| w.unit == unit).count();
        self.units.insert(
            unit.to_string(),
            UnitRotationState {
                total_words,
                ..Default::default()
            },
        );
        true
    }

    /// Mark a word as seen in its own unit's cycle.
    ///
    /// Words of uninitialized units are ignored; returns whether it was recorded.
    pub fn mark_word_as_seen(&mut self, word: &WordRef) -> bool {
        match self.units.get_mut(&word.unit) {
            Some(state) => {
                state.seen_headwords.insert(word.headword.clone());
                true
            }
            None => false,
        }
    }

    pub fn is_word_seen(&self, word: &WordRef) -> bool {
        self.units
            .get(&word.unit)
            .map_or(false, |state| state.seen_headwords.contains(&word.headword))
    }

    /// Candidates of `unit` not seen in the current cycle.
    pub fn get_unseen_words<'a>(&self, words: &'a [WordRef], unit: &str) -> Vec<&'a WordRef> {
        let state = self.units.get(unit);
        words
            .iter()
            .filter(|w| w.unit == unit)
            .filter(|w| state.map_or(true, |s| !s.seen_headwords.contains(&w.headword)))
            .collect()
    }

    /// Pick the next word to show for `unit`.
    ///
    /// Mid-cycle the pick is uniform over unseen words. When nothing is left
    /// the unit is reset and the pick follows the rotation policy. `None`
    /// only when `unit` has no words at all.
    pub fn get_next_word<'a>(&mut self, words: &'a [WordRef], unit: &str) -> Option<&'a WordRef> {
        let unseen = self.get_unseen_words(words, unit);
        if let Some(word) = unseen.choose(&mut self.rng) {
            return Some(*word);
        }

        self.reset_unit(unit);
        let mut pool = words.iter().filter(|w| w.unit == unit);
        match self.policy {
            RotationPolicy::FirstAfterReset => pool.next(),
            RotationPolicy::ShuffledCycle => pool.collect::<Vec<_>>().choose(&mut self.rng).copied(),
        }
    }

    /// Pick `count` distinct words for `unit`.
    ///
    /// If the unseen pool cannot cover `count`, the unit is reset and the
    /// sample is drawn from the whole unit instead.
    pub fn get_next_words<'a>(
        &mut self,
        words: &'a [WordRef],
        unit: &str,
        count: usize,
    ) -> Vec<&'a WordRef> {
        let unseen = self.get_unseen_words(words, unit);
        let pool = if unseen.len() < count {
            self.reset_unit(unit);
            words.iter().filter(|w| w.unit == unit).collect()
        } else {
            unseen
        };
        pool.choose_multiple(&mut self.rng, count).copied().collect()
    }

    pub fn get_progress(&self, unit: &str) -> UnitProgress {
        let Some(state) = self.units.get(unit) else {
            return UnitProgress::default();
        };
        if state.total_words == 0 {
            return UnitProgress::default();
        }

        let seen_count = state.seen_headwords.len();
        let percentage = (seen_count as f64 / state.total_words as f64 * 100.0).round() as u32;
        UnitProgress {
            seen_count,
            total_count: state.total_words,
            percentage,
        }
    }

    /// Start a new cycle for `unit`; its size is kept.
    pub fn reset_unit(&mut self, unit: &str) {
        if let Some(state) = self.units.get_mut(unit) {
            state.seen_headwords.clear();
        }
    }
}
