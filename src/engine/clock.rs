use anyhow::Result;

use crate::traits::audio::AudioTransport;

/// Millisecond view of the audio transport's playhead.
///
/// The transport speaks seconds; every engine-facing reading here is
/// milliseconds. This adapter is the only place the conversion happens,
/// so notes and judgments can never disagree about units. It keeps no
/// state of its own: paused reads simply return the transport's held
/// position, and a seek is visible in the very next reading.
pub struct Clock<A: AudioTransport> {
    transport: A,
}

impl<A: AudioTransport> Clock<A> {
    pub fn new(transport: A) -> Self {
        Self { transport }
    }

    /// Elapsed playback time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.transport.position_secs() * 1000.0
    }

    /// Seek the underlying transport to `ms`.
    pub fn seek_ms(&mut self, ms: f64) {
        self.transport.set_position_secs(ms / 1000.0);
    }

    /// Whether the transport reports end-of-track.
    pub fn ended(&self) -> bool {
        self.transport.ended()
    }

    pub fn play(&mut self) -> Result<()> {
        self.transport.play()
    }

    pub fn pause(&mut self) {
        self.transport.pause();
    }

    pub fn transport(&self) -> &A {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut A {
        &mut self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::audio::MockAudio;

    #[test]
    fn converts_transport_seconds_to_ms() {
        let mut audio = MockAudio::new();
        audio.set_position_secs(1.25);
        let clock = Clock::new(audio);
        assert_eq!(clock.elapsed_ms(), 1250.0);
    }

    #[test]
    fn seek_is_reflected_immediately() {
        let mut clock = Clock::new(MockAudio::new());
        clock.seek_ms(5000.0);
        assert_eq!(clock.elapsed_ms(), 5000.0);
    }

    #[test]
    fn reads_held_position_while_paused() {
        let mut clock = Clock::new(MockAudio::new());
        clock.play().unwrap();
        clock.transport_mut().advance_secs(2.0);
        clock.pause();
        assert_eq!(clock.elapsed_ms(), 2000.0);
        assert_eq!(clock.elapsed_ms(), 2000.0);
    }
}
