//! Playback of recorded search frames.
//!
//! A [`Player`] holds a frame sequence and delivers it to a [`FrameSink`] at
//! a fixed rate. It never spawns timers: the host calls [`Player::tick`] with
//! the current time from whatever loop it runs, and the player decides
//! whether a frame is due.

mod player;
mod sink;

pub use player::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, PlayState, PlaybackStats, Player, Tick};
pub use sink::{Callbacks, FrameSink, callbacks};
