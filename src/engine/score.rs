use crate::config::ScoreFormula;

use super::judge::{JudgmentEvent, JudgmentKind};

/// Combo and score, derived purely from the judgment stream.
///
/// Consumes events in the (non-decreasing) order the engine produces
/// them; no operation here can fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTracker {
    formula: ScoreFormula,
    combo: u32,
    max_combo: u32,
    score: u64,
    hit_count: u32,
    miss_count: u32,
}

impl ScoreTracker {
    pub fn new(formula: ScoreFormula) -> Self {
        Self {
            formula,
            combo: 0,
            max_combo: 0,
            score: 0,
            hit_count: 0,
            miss_count: 0,
        }
    }

    pub fn apply(&mut self, event: &JudgmentEvent) {
        match event.kind {
            JudgmentKind::Hit => {
                // The multiplier uses the pre-hit combo; with the
                // default formula this awards exactly base + combo.
                self.score += self.formula.points(self.combo);
                self.combo += 1;
                self.hit_count += 1;
                self.max_combo = self.max_combo.max(self.combo);
            }
            JudgmentKind::Miss => {
                self.combo = 0;
                self.miss_count += 1;
            }
        }
    }

    /// Count of consecutive hits since the last miss.
    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// The multiplier the next hit would be scored with.
    pub fn multiplier(&self) -> f64 {
        self.formula.multiplier(self.combo)
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.formula);
    }
}
