use anyhow::{Result, anyhow};

/// Abstraction over the host's audio playback element.
///
/// The core only drives transport and reads position; it never decodes
/// audio. Positions are in seconds because that is what playback
/// elements speak; everything engine-side is milliseconds (see
/// `engine::Clock`).
/// Implementations: host-provided adapter (production), MockAudio (testing).
pub trait AudioTransport {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);

    /// Current playback position in seconds. Must stay readable (and
    /// hold its value) while paused.
    fn position_secs(&self) -> f64;

    /// Seek to a playback position in seconds. Must be reflected in the
    /// next `position_secs` call.
    fn set_position_secs(&mut self, secs: f64);

    /// Whether the track has played to its end.
    fn ended(&self) -> bool;
}

/// In-memory transport for deterministic testing.
#[derive(Debug, Clone, Default)]
pub struct MockAudio {
    position_secs: f64,
    playing: bool,
    ended: bool,
    fail_play: bool,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose `play` always fails, for session-start error
    /// paths.
    pub fn failing() -> Self {
        Self {
            fail_play: true,
            ..Self::default()
        }
    }

    /// Advance the playhead; has no effect while paused, like a real
    /// playback element.
    pub fn advance_secs(&mut self, secs: f64) {
        if self.playing && !self.ended {
            self.position_secs += secs;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_ended(&mut self, ended: bool) {
        self.ended = ended;
    }
}

impl AudioTransport for MockAudio {
    fn play(&mut self) -> Result<()> {
        if self.fail_play {
            return Err(anyhow!("playback rejected"));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn position_secs(&self) -> f64 {
        self.position_secs
    }

    fn set_position_secs(&mut self, secs: f64) {
        self.position_secs = secs;
    }

    fn ended(&self) -> bool {
        self.ended
    }
}
