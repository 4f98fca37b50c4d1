use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::model::beatmap::Beatmap;
use crate::model::note::NoteState;
use crate::traits::audio::AudioTransport;
use crate::traits::input::{KeyEdge, KeyEvent};
use crate::traits::time::TimeProvider;

use super::clock::Clock;
use super::judge::JudgeEngine;
use super::score::ScoreTracker;
use super::timer::{CountdownTimer, TickTimer};

/// Lifecycle state of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Paused,
    /// Countdown after `resume()`; input is ignored and the sweep stays
    /// stopped until it completes.
    Resuming,
    /// Terminal.
    Finished,
}

/// One play-through of a beatmap.
///
/// Owns the beatmap, judgment, scoring, clock and timers; all mutation
/// goes through the methods below. The host calls `update` once per
/// frame and forwards key events; the render collaborator only reads
/// the snapshot accessors and never gets called back.
///
/// Lifecycle calls that are illegal in the current state are logged
/// no-ops, so redundant key presses and stale UI callbacks are
/// harmless.
pub struct Session<A: AudioTransport, T: TimeProvider> {
    config: EngineConfig,
    beatmap: Beatmap,
    clock: Clock<A>,
    time: T,
    judge: JudgeEngine,
    tracker: ScoreTracker,
    sweep_timer: TickTimer,
    resume_timer: CountdownTimer,
    state: SessionState,
}

impl<A: AudioTransport, T: TimeProvider> Session<A, T> {
    pub fn new(beatmap: Beatmap, transport: A, time: T, config: EngineConfig) -> Self {
        let judge = JudgeEngine::new(&beatmap, config.tolerance_ms);
        let tracker = ScoreTracker::new(config.score);
        let sweep_timer = TickTimer::new(config.sweep_interval_ms);
        let resume_timer = CountdownTimer::new(config.resume_delay_ms);
        Self {
            config,
            beatmap,
            clock: Clock::new(transport),
            time,
            judge,
            tracker,
            sweep_timer,
            resume_timer,
            state: SessionState::NotStarted,
        }
    }

    /// Begin playback. A transport that refuses to play is fatal: the
    /// session stays `NotStarted` and the error propagates.
    pub fn start(&mut self) -> Result<()> {
        if self.state != SessionState::NotStarted {
            warn!("start() ignored in state {:?}", self.state);
            return Ok(());
        }

        self.clock
            .play()
            .context("audio transport refused to start playback")?;
        self.sweep_timer.start(self.time.now_ms());
        self.state = SessionState::Running;
        info!("session started: {} notes", self.beatmap.note_count());
        Ok(())
    }

    /// Pause playback and stop the sweep. Legal while `Running`, and
    /// while `Resuming` (which cancels the pending countdown so its
    /// completion can never fire).
    pub fn pause(&mut self) {
        match self.state {
            SessionState::Running => {}
            SessionState::Resuming => self.resume_timer.cancel(),
            _ => {
                warn!("pause() ignored in state {:?}", self.state);
                return;
            }
        }

        self.clock.pause();
        self.sweep_timer.stop();
        self.state = SessionState::Paused;
        info!("session paused at {:.0}ms", self.clock.elapsed_ms());
    }

    /// Arm the resume countdown. Playback restarts when it elapses (see
    /// `update`); until then key events are ignored and no sweep runs.
    pub fn resume(&mut self) {
        if self.state != SessionState::Paused {
            warn!("resume() ignored in state {:?}", self.state);
            return;
        }

        self.resume_timer.arm(self.time.now_ms());
        self.state = SessionState::Resuming;
        info!("resuming in {:.0}ms", self.config.resume_delay_ms);
    }

    /// Seek past the intro. Legal only while `Running` and before the
    /// skip point has been reached. Pending notes in the skipped
    /// interval are resolved to Missed rather than silently dropped.
    pub fn skip_intro(&mut self) {
        if self.state != SessionState::Running {
            warn!("skip_intro() ignored in state {:?}", self.state);
            return;
        }

        let at_ms = self.clock.elapsed_ms();
        let skip_time_ms = self.beatmap.skip_time_ms();
        if at_ms >= skip_time_ms {
            warn!("skip_intro() ignored: skip point already passed");
            return;
        }

        for event in self.judge.resolve_before(&self.beatmap, skip_time_ms, at_ms) {
            self.tracker.apply(&event);
        }
        self.clock.seek_ms(skip_time_ms);
        info!("skipped intro: {:.0}ms -> {:.0}ms", at_ms, skip_time_ms);
    }

    /// Terminal transition; legal from any state.
    pub fn finish(&mut self) {
        if self.state == SessionState::Finished {
            return;
        }

        self.clock.pause();
        self.sweep_timer.stop();
        self.resume_timer.cancel();
        self.state = SessionState::Finished;
        info!(
            "session finished: score {} max combo {}",
            self.tracker.score(),
            self.tracker.max_combo()
        );
    }

    /// Feed one logical key event. Ignored outside `Running`, so a
    /// countdown can never hand out free hits.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if self.state != SessionState::Running {
            debug!("key event ignored in state {:?}", self.state);
            return;
        }

        let at_ms = self.clock.elapsed_ms();
        match event.edge {
            KeyEdge::Down => {
                if let Some(judgment) = self.judge.on_key_down(&self.beatmap, event.lane, at_ms) {
                    self.tracker.apply(&judgment);
                }
            }
            KeyEdge::Up => self.judge.on_key_up(event.lane, at_ms),
        }
    }

    /// Per-frame drive. Completes a pending resume countdown, runs due
    /// sweep ticks against the latest clock reading, and finishes the
    /// session when the transport reports end-of-track.
    pub fn update(&mut self) {
        let now_ms = self.time.now_ms();

        if self.state == SessionState::Resuming && self.resume_timer.poll(now_ms) {
            match self.clock.play() {
                Ok(()) => {
                    self.sweep_timer.start(now_ms);
                    self.state = SessionState::Running;
                    info!("session resumed at {:.0}ms", self.clock.elapsed_ms());
                }
                Err(err) => {
                    // An unplayable session is not recovered.
                    error!("transport failed on resume: {err:#}");
                    self.finish();
                    return;
                }
            }
        }

        if self.state != SessionState::Running {
            return;
        }

        if self.sweep_timer.poll(now_ms) {
            // Always judge against the clock as of now, never a cached
            // reading from when the tick was scheduled.
            let at_ms = self.clock.elapsed_ms();
            for event in self.judge.sweep(&self.beatmap, at_ms) {
                self.tracker.apply(&event);
            }
        }

        if self.clock.ended() {
            self.finish();
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Elapsed playback time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.clock.elapsed_ms()
    }

    pub fn combo(&self) -> u32 {
        self.tracker.combo()
    }

    pub fn score(&self) -> u64 {
        self.tracker.score()
    }

    pub fn multiplier(&self) -> f64 {
        self.tracker.multiplier()
    }

    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    pub fn note_state(&self, index: usize) -> Option<NoteState> {
        self.judge.note_state(index)
    }

    /// One state per note, indexed like `beatmap().notes()`.
    pub fn note_states(&self) -> &[NoteState] {
        self.judge.states()
    }

    pub fn all_notes_resolved(&self) -> bool {
        self.judge.all_resolved()
    }

    pub fn beatmap(&self) -> &Beatmap {
        &self.beatmap
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Time left on the resume countdown, for the host's overlay label.
    pub fn resume_remaining_ms(&self) -> Option<f64> {
        self.resume_timer.remaining_ms(self.time.now_ms())
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    pub fn transport(&self) -> &A {
        self.clock.transport()
    }

    /// The host's handle to its own playback element.
    pub fn transport_mut(&mut self) -> &mut A {
        self.clock.transport_mut()
    }
}
