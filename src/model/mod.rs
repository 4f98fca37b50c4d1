// Data models for beatmaps and notes.

pub mod beatmap;
pub mod error;
pub mod note;
pub mod time;

pub use beatmap::{Beatmap, BeatmapFile, NoteEntry};
pub use error::BeatmapError;
pub use note::{Lane, Note, NoteState};
pub use time::parse_timestamp;
