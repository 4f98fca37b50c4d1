use crate::model::note::Lane;

/// Edge type of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down,
    Up,
}

/// A logical key event, already mapped from a physical key to a lane by
/// the host's input layer.
///
/// Events carry no timestamp: they are judged against the audio clock
/// at the moment the session processes them, which is the one
/// authoritative timeline (events are delivered to completion, one at a
/// time, so there is nothing to backdate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub lane: Lane,
    pub edge: KeyEdge,
}

impl KeyEvent {
    pub fn down(lane: Lane) -> Self {
        Self {
            lane,
            edge: KeyEdge::Down,
        }
    }

    pub fn up(lane: Lane) -> Self {
        Self {
            lane,
            edge: KeyEdge::Up,
        }
    }
}
