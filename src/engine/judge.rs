use log::debug;

use crate::model::beatmap::Beatmap;
use crate::model::note::{Lane, NoteState};

/// Kind of judgment produced for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgmentKind {
    Hit,
    Miss,
}

/// A single judgment, consumed immediately by the score tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JudgmentEvent {
    pub lane: Lane,
    pub note_index: usize,
    pub kind: JudgmentKind,
    pub at_ms: f64,
}

/// Per-lane judgment state over an immutable beatmap.
///
/// Each lane keeps a cursor at its earliest still-pending note; only
/// that head note is ever matched against a keypress (FIFO, no
/// look-ahead skipping). State transitions are one-way and happen
/// exactly here, nowhere else.
pub struct JudgeEngine {
    tolerance_ms: f64,
    states: Vec<NoteState>,
    /// Per lane: offset into `beatmap.lane_index()[lane]`. Everything
    /// before the cursor is resolved, everything at or after is pending.
    cursors: Vec<usize>,
}

impl JudgeEngine {
    pub fn new(beatmap: &Beatmap, tolerance_ms: f64) -> Self {
        Self {
            tolerance_ms,
            states: vec![NoteState::Pending; beatmap.note_count()],
            cursors: vec![0; beatmap.lane_index().len()],
        }
    }

    /// Index of the earliest pending note in a lane, if any.
    fn head(&self, beatmap: &Beatmap, lane_idx: usize) -> Option<usize> {
        beatmap.lane_index()[lane_idx]
            .get(self.cursors[lane_idx])
            .copied()
    }

    /// Judge a key press against the lane's head note.
    ///
    /// Emits a Hit when the press lands within the tolerance window.
    /// A press with no note in range emits nothing; stray presses are
    /// not penalized.
    pub fn on_key_down(
        &mut self,
        beatmap: &Beatmap,
        lane: Lane,
        at_ms: f64,
    ) -> Option<JudgmentEvent> {
        let lane_idx = lane.index();
        if lane_idx >= self.cursors.len() {
            return None;
        }

        let note_index = self.head(beatmap, lane_idx)?;
        let note = &beatmap.notes()[note_index];
        let diff_ms = at_ms - note.start_ms;

        if diff_ms.abs() > self.tolerance_ms {
            return None;
        }

        self.states[note_index] = NoteState::Hit;
        self.cursors[lane_idx] += 1;
        debug!(
            "hit: lane {} note {} at {:.1}ms ({:+.1}ms)",
            lane_idx, note_index, at_ms, diff_ms
        );
        Some(JudgmentEvent {
            lane,
            note_index,
            kind: JudgmentKind::Hit,
            at_ms,
        })
    }

    /// Key releases are accepted but not judged: hold notes are judged
    /// by their start time only.
    pub fn on_key_up(&mut self, _lane: Lane, _at_ms: f64) {}

    /// Resolve every note whose tolerance window has closed unpressed.
    ///
    /// Idempotent: a second sweep with the same time finds the cursors
    /// already advanced and emits nothing.
    pub fn sweep(&mut self, beatmap: &Beatmap, at_ms: f64) -> Vec<JudgmentEvent> {
        let tolerance_ms = self.tolerance_ms;
        self.miss_while(beatmap, at_ms, move |start_ms| {
            at_ms - start_ms > tolerance_ms
        })
    }

    /// Forcibly resolve every pending note starting strictly before
    /// `cutoff_ms` to Missed. Used when the intro is skipped so no note
    /// in the skipped interval is left pending.
    pub fn resolve_before(
        &mut self,
        beatmap: &Beatmap,
        cutoff_ms: f64,
        at_ms: f64,
    ) -> Vec<JudgmentEvent> {
        self.miss_while(beatmap, at_ms, |start_ms| start_ms < cutoff_ms)
    }

    fn miss_while(
        &mut self,
        beatmap: &Beatmap,
        at_ms: f64,
        expired: impl Fn(f64) -> bool,
    ) -> Vec<JudgmentEvent> {
        let mut events = Vec::new();
        for lane_idx in 0..self.cursors.len() {
            while let Some(note_index) = self.head(beatmap, lane_idx) {
                let note = &beatmap.notes()[note_index];
                if !expired(note.start_ms) {
                    break;
                }
                self.states[note_index] = NoteState::Missed;
                self.cursors[lane_idx] += 1;
                debug!(
                    "miss: lane {} note {} (start {:.1}ms) at {:.1}ms",
                    lane_idx, note_index, note.start_ms, at_ms
                );
                events.push(JudgmentEvent {
                    lane: note.lane,
                    note_index,
                    kind: JudgmentKind::Miss,
                    at_ms,
                });
            }
        }
        events
    }

    pub fn note_state(&self, index: usize) -> Option<NoteState> {
        self.states.get(index).copied()
    }

    /// One state per note, indexed like `beatmap.notes()`.
    pub fn states(&self) -> &[NoteState] {
        &self.states
    }

    pub fn pending_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_pending()).count()
    }

    pub fn all_resolved(&self) -> bool {
        self.states.iter().all(|s| s.is_resolved())
    }

    pub fn tolerance_ms(&self) -> f64 {
        self.tolerance_ms
    }
}
