//! Playback driver owning time accumulation on behalf of a host.
//!
//! The evaluator is stateless; this is the "caller" that advances time each
//! tick and stops once a `Once` timeline reports [`PlaybackStatus::FinishedAtEnd`].

use serde::{Deserialize, Serialize};

use crate::data::Timeline;
use crate::outputs::{BlendState, PlaybackStatus};
use crate::sampling::evaluate;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PlayerCommand {
    /// Restart from time 0.
    Play,
    Pause,
    Resume,
    /// Rewind to 0 and stop.
    Stop,
    SetSpeed { speed: f32 },
    Seek { time: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub time: f32,
    pub speed: f32,
    pub playing: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            playing: false,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Play => {
                self.time = 0.0;
                self.playing = true;
            }
            PlayerCommand::Pause => self.playing = false,
            PlayerCommand::Resume => self.playing = true,
            PlayerCommand::Stop => {
                self.time = 0.0;
                self.playing = false;
            }
            PlayerCommand::SetSpeed { speed } => {
                if speed.is_finite() {
                    self.speed = speed;
                }
            }
            PlayerCommand::Seek { time } => {
                if time.is_finite() {
                    self.time = time;
                }
            }
        }
    }

    /// Advance by `dt * speed` (only while playing) and evaluate.
    pub fn tick<'a>(
        &mut self,
        dt: f32,
        timeline: &'a Timeline,
    ) -> (BlendState<'a>, PlaybackStatus) {
        if self.playing && dt.is_finite() {
            self.time += dt * self.speed;
        }
        let (state, status) = evaluate(timeline, self.time);
        if status == PlaybackStatus::FinishedAtEnd && self.playing {
            log::debug!("playback finished at t={}", self.time);
            self.playing = false;
        }
        (state, status)
    }

    /// Evaluate at the current time without advancing (scrubbing / preview).
    pub fn sample<'a>(&self, timeline: &'a Timeline) -> (BlendState<'a>, PlaybackStatus) {
        evaluate(timeline, self.time)
    }
}
