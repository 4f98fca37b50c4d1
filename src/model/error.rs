use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a beatmap.
///
/// All of these are fatal to `load`: a session is never constructed
/// from a malformed beatmap.
#[derive(Debug, Error)]
pub enum BeatmapError {
    #[error("Failed to read beatmap file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse beatmap JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp {0:?} (expected MM:SS:mmm)")]
    InvalidTimestamp(String),

    #[error("Unknown lane {lane} (configured lane count is {lane_count})")]
    UnknownLane { lane: u32, lane_count: usize },

    #[error("Negative note start time: {start_ms}ms")]
    NegativeStart { start_ms: f64 },

    #[error("Hold note ends at {end_ms}ms, at or before its start at {start_ms}ms")]
    InvalidHoldRange { start_ms: f64, end_ms: f64 },
}
