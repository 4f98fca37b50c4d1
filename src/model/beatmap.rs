use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::config::EngineConfig;

use super::error::BeatmapError;
use super::note::{Lane, Note};
use super::time::parse_timestamp;

/// Raw beatmap file contents, as serialized on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapFile {
    /// End of the intro section, `MM:SS:mmm`.
    #[serde(rename = "skipTime")]
    pub skip_time: String,
    /// Path to the audio track, resolved by the host.
    pub song: PathBuf,
    pub notes: Vec<NoteEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteEntry {
    /// 1-based lane number.
    pub key: u32,
    pub start: String,
    pub end: Option<String>,
}

/// Immutable, validated note set the engine judges against.
///
/// Notes are sorted ascending by start time, with a per-lane index so
/// the judge can walk each lane front to back.
#[derive(Debug, Clone)]
pub struct Beatmap {
    notes: Vec<Note>,
    lane_index: Vec<Vec<usize>>,
    skip_time_ms: f64,
    song: PathBuf,
}

impl Beatmap {
    /// Load and validate a beatmap from a JSON file on disk.
    pub fn load_path(path: &Path, config: &EngineConfig) -> Result<Self, BeatmapError> {
        let content = fs::read_to_string(path).map_err(|source| BeatmapError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: BeatmapFile = serde_json::from_str(&content)?;
        Self::load(file, config)
    }

    /// Validate raw file contents into a `Beatmap`.
    pub fn load(file: BeatmapFile, config: &EngineConfig) -> Result<Self, BeatmapError> {
        let skip_time_ms = parse_timestamp(&file.skip_time)?;

        let mut notes = Vec::with_capacity(file.notes.len());
        for entry in &file.notes {
            // The file format counts lanes from 1.
            if entry.key < 1 || entry.key as usize > config.lane_count {
                return Err(BeatmapError::UnknownLane {
                    lane: entry.key,
                    lane_count: config.lane_count,
                });
            }
            let lane = Lane((entry.key - 1) as u8);

            let start_ms = parse_timestamp(&entry.start)?;
            let end_ms = match &entry.end {
                Some(end) if config.hold_notes => Some(parse_timestamp(end)?),
                // Hold support disabled: the note degrades to a tap.
                _ => None,
            };

            notes.push(Note {
                lane,
                start_ms,
                end_ms,
            });
        }

        let beatmap = Self::from_notes(notes, skip_time_ms, file.song, config)?;
        info!(
            "loaded beatmap: {} notes across {} lanes, skip point {:.0}ms",
            beatmap.note_count(),
            config.lane_count,
            beatmap.skip_time_ms
        );
        Ok(beatmap)
    }

    /// Build a beatmap from already-constructed notes.
    ///
    /// Applies the same validation as `load`; used by hosts that produce
    /// notes programmatically and by tests.
    pub fn from_notes(
        mut notes: Vec<Note>,
        skip_time_ms: f64,
        song: PathBuf,
        config: &EngineConfig,
    ) -> Result<Self, BeatmapError> {
        for note in &notes {
            if note.lane.index() >= config.lane_count {
                return Err(BeatmapError::UnknownLane {
                    lane: note.lane.index() as u32 + 1,
                    lane_count: config.lane_count,
                });
            }
            if note.start_ms < 0.0 {
                return Err(BeatmapError::NegativeStart {
                    start_ms: note.start_ms,
                });
            }
            if let Some(end_ms) = note.end_ms {
                if end_ms <= note.start_ms {
                    return Err(BeatmapError::InvalidHoldRange {
                        start_ms: note.start_ms,
                        end_ms,
                    });
                }
            }
        }

        notes.sort_by(|a, b| a.start_ms.total_cmp(&b.start_ms));

        let mut lane_index = vec![Vec::new(); config.lane_count];
        for (i, note) in notes.iter().enumerate() {
            lane_index[note.lane.index()].push(i);
        }

        Ok(Self {
            notes,
            lane_index,
            skip_time_ms,
            song,
        })
    }

    /// All notes, sorted ascending by `start_ms`.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Note indices per lane, each sorted ascending by `start_ms`.
    pub fn lane_index(&self) -> &[Vec<usize>] {
        &self.lane_index
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// End of the intro section; the skip-intro target.
    pub fn skip_time_ms(&self) -> f64 {
        self.skip_time_ms
    }

    /// Audio track path from the beatmap file. The core never decodes
    /// it; the host feeds it to its playback element.
    pub fn song(&self) -> &Path {
        &self.song
    }

    /// Start time of the last note, if any.
    pub fn last_note_ms(&self) -> Option<f64> {
        self.notes.last().map(|n| n.start_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::builders::beatmap_with_notes;

    #[test]
    fn notes_sorted_within_each_lane() {
        let beatmap = beatmap_with_notes(vec![
            Note::tap(Lane(1), 3000.0),
            Note::tap(Lane(0), 2000.0),
            Note::tap(Lane(1), 1000.0),
            Note::tap(Lane(0), 500.0),
        ]);

        for indices in beatmap.lane_index() {
            let times: Vec<f64> = indices.iter().map(|&i| beatmap.notes()[i].start_ms).collect();
            let mut sorted = times.clone();
            sorted.sort_by(f64::total_cmp);
            assert_eq!(times, sorted);
        }
    }

    #[test]
    fn rejects_negative_start() {
        let result = Beatmap::from_notes(
            vec![Note::tap(Lane(0), -1.0)],
            0.0,
            PathBuf::from("music.mp3"),
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(BeatmapError::NegativeStart { .. })));
    }

    #[test]
    fn rejects_inverted_hold_range() {
        let result = Beatmap::from_notes(
            vec![Note::hold(Lane(0), 2000.0, 2000.0)],
            0.0,
            PathBuf::from("music.mp3"),
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(BeatmapError::InvalidHoldRange { .. })));
    }

    #[test]
    fn rejects_out_of_range_lane() {
        let result = Beatmap::from_notes(
            vec![Note::tap(Lane(4), 1000.0)],
            0.0,
            PathBuf::from("music.mp3"),
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(BeatmapError::UnknownLane { .. })));
    }
}
