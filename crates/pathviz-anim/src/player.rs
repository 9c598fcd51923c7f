use std::time::{Duration, Instant};

use pathviz_paths::{AnimationFrame, path_len, visit_count};

use crate::sink::FrameSink;

/// Default playback rate, in frames per second.
pub const DEFAULT_SPEED: f64 = 60.0;
/// Slowest accepted playback rate.
pub const MIN_SPEED: f64 = 1.0;
/// Fastest accepted playback rate.
pub const MAX_SPEED: f64 = 1000.0;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    /// Nothing playing: no frames, never started, exhausted or reset.
    #[default]
    Idle,
    /// Frames are dispatched on [`Player::tick`].
    Playing,
    /// Stopped mid-sequence; [`Player::play`] resumes from the cursor.
    Paused,
}

/// Whether the host should keep calling [`Player::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Counters describing the loaded sequence and its playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStats {
    /// Visit frames in the loaded sequence.
    pub visited_count: usize,
    /// Path frames in the loaded sequence.
    pub path_length: usize,
    /// Time spent in the playing state.
    pub duration: Duration,
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Replays a frame sequence at a fixed rate.
///
/// At most one frame is dispatched per tick. When a tick arrives at least one
/// interval (`1 / speed` seconds) after the previous dispatch, the next frame
/// goes out and the leftover `delta % interval` is carried into the next
/// wait, so the long-run rate does not drift.
#[derive(Debug, Clone)]
pub struct Player {
    frames: Vec<AnimationFrame>,
    cursor: usize,
    state: PlayState,
    speed: f64,
    /// Reference point of the inter-frame wait.
    last_dispatch: Instant,
    /// Last instant already counted into `stats.duration`.
    last_tick: Instant,
    stats: PlaybackStats,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// An idle player with no frames at the default speed.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frames: Vec::new(),
            cursor: 0,
            state: PlayState::Idle,
            speed: DEFAULT_SPEED,
            last_dispatch: now,
            last_tick: now,
            stats: PlaybackStats::default(),
        }
    }

    /// Replace the sequence, rewind and recompute the statistics.
    ///
    /// Any running playback stops.
    pub fn load(&mut self, frames: Vec<AnimationFrame>) {
        self.stats = PlaybackStats {
            visited_count: visit_count(&frames),
            path_length: path_len(&frames),
            duration: Duration::ZERO,
        };
        self.frames = frames;
        self.cursor = 0;
        self.state = PlayState::Idle;
        log::debug!(
            "loaded {} frames ({} visits, {} path)",
            self.frames.len(),
            self.stats.visited_count,
            self.stats.path_length
        );
    }

    /// Start or resume playback at `now`.
    ///
    /// When nothing is left to play the sink is told playback is complete and
    /// [`Tick::Stop`] is returned. Calling this while already playing changes
    /// nothing.
    pub fn play<S: FrameSink>(&mut self, now: Instant, mut sink: S) -> Tick {
        if self.cursor >= self.frames.len() {
            self.state = PlayState::Idle;
            sink.on_complete();
            return Tick::Stop;
        }
        if self.state != PlayState::Playing {
            self.state = PlayState::Playing;
            self.last_dispatch = now;
            self.last_tick = now;
            log::trace!("play from frame {}/{}", self.cursor, self.frames.len());
        }
        Tick::Continue
    }

    /// Advance playback to `now`, dispatching at most one frame.
    ///
    /// Returns [`Tick::Stop`] when not playing or when this tick finished the
    /// sequence, in which case [`FrameSink::on_complete`] has been called.
    pub fn tick<S: FrameSink>(&mut self, now: Instant, mut sink: S) -> Tick {
        if self.state != PlayState::Playing {
            return Tick::Stop;
        }
        self.stats.duration += now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let delta = now.saturating_duration_since(self.last_dispatch);
        let interval = self.interval();
        if delta < interval {
            return Tick::Continue;
        }
        let carry = delta.as_nanos() % interval.as_nanos().max(1);
        let carry = Duration::from_nanos(u64::try_from(carry).unwrap_or(0));
        self.last_dispatch = now.checked_sub(carry).unwrap_or(now);

        if let Some(&frame) = self.frames.get(self.cursor) {
            sink.on_frame(frame);
            self.cursor += 1;
        }
        if self.cursor >= self.frames.len() {
            self.state = PlayState::Idle;
            log::debug!("playback complete after {:?}", self.stats.duration);
            sink.on_complete();
            return Tick::Stop;
        }
        Tick::Continue
    }

    /// Stop dispatching, keeping the cursor.
    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Paused;
            log::trace!("paused at frame {}/{}", self.cursor, self.frames.len());
        }
    }

    /// Stop, rewind to the first frame and zero the statistics.
    ///
    /// The loaded frames are kept.
    pub fn reset(&mut self) {
        self.pause();
        self.state = PlayState::Idle;
        self.cursor = 0;
        self.stats = PlaybackStats::default();
    }

    /// Stop and deliver every remaining frame immediately, then report
    /// completion.
    pub fn skip_to_end<S: FrameSink>(&mut self, mut sink: S) {
        self.pause();
        let remaining = self.frames.len().saturating_sub(self.cursor);
        for &frame in &self.frames[self.cursor.min(self.frames.len())..] {
            sink.on_frame(frame);
        }
        self.cursor = self.frames.len();
        self.state = PlayState::Idle;
        log::debug!("skipped {remaining} frames to the end");
        sink.on_complete();
    }

    /// Set the playback rate in frames per second.
    ///
    /// The value is clamped to [`MIN_SPEED`]..=[`MAX_SPEED`]; non-finite
    /// values select [`DEFAULT_SPEED`]. Takes effect on the next tick.
    pub fn set_speed(&mut self, fps: f64) {
        self.speed = if fps.is_finite() {
            fps.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            DEFAULT_SPEED
        };
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Time between two dispatches at the current speed.
    pub fn interval(&self) -> Duration {
        Duration::from_nanos((1e9 / self.speed) as u64)
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Index of the next frame to dispatch.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames not yet dispatched.
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }

    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    pub fn stats(&self) -> PlaybackStats {
        self.stats
    }
}
