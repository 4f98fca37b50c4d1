//! Test utilities for building beatmaps and judgment fixtures.

pub mod builders {
    use std::path::PathBuf;

    use crate::config::EngineConfig;
    use crate::model::beatmap::Beatmap;
    use crate::model::note::Note;

    /// Build a beatmap from notes with the default config and no intro.
    pub fn beatmap_with_notes(notes: Vec<Note>) -> Beatmap {
        Beatmap::from_notes(
            notes,
            0.0,
            PathBuf::from("music.mp3"),
            &EngineConfig::default(),
        )
        .expect("test beatmap must be valid")
    }
}
