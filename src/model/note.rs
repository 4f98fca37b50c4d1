use serde::{Deserialize, Serialize};

/// A 0-based lane identifier.
///
/// The number of valid lanes is set by `EngineConfig::lane_count`; the
/// beatmap loader rejects anything outside it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Lane(pub u8);

impl Lane {
    /// Returns the lane index (0-based).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create a lane from a 0-based index.
    pub fn from_index(index: usize) -> Option<Lane> {
        u8::try_from(index).ok().map(Lane)
    }
}

/// A single judgable note.
///
/// Created once at beatmap-load time and immutable afterwards; judgment
/// state lives in the `JudgeEngine`, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub lane: Lane,
    pub start_ms: f64,
    /// For hold notes: the release time. Always greater than `start_ms`.
    pub end_ms: Option<f64>,
}

impl Note {
    /// Create a new tap note.
    pub fn tap(lane: Lane, start_ms: f64) -> Self {
        Self {
            lane,
            start_ms,
            end_ms: None,
        }
    }

    /// Create a new hold note.
    pub fn hold(lane: Lane, start_ms: f64, end_ms: f64) -> Self {
        Self {
            lane,
            start_ms,
            end_ms: Some(end_ms),
        }
    }

    /// Returns true if this is a hold note.
    pub fn is_hold(&self) -> bool {
        self.end_ms.is_some()
    }
}

/// Judgment state of a note.
///
/// Transitions are one-way (Pending -> Hit, Pending -> Missed) and
/// happen at most once per note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    Pending,
    Hit,
    Missed,
}

impl NoteState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        !self.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_index_round_trip() {
        assert_eq!(Lane::from_index(0), Some(Lane(0)));
        assert_eq!(Lane::from_index(3), Some(Lane(3)));
        assert_eq!(Lane(3).index(), 3);
        assert_eq!(Lane::from_index(300), None);
    }

    #[test]
    fn hold_note_detection() {
        assert!(!Note::tap(Lane(0), 1000.0).is_hold());
        assert!(Note::hold(Lane(0), 1000.0, 2000.0).is_hold());
    }
}
