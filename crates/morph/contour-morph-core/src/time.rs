//! Effective-time mapping for the three loop modes.
//!
//! Stateless: the same raw time always maps to the same timeline time, so
//! hosts may scrub backwards or jump arbitrarily.

use crate::data::{LoopMode, Timeline};
use crate::outputs::PlaybackStatus;

/// Floating-point modulo whose result takes the sign of `b`.
pub fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

/// Reflect t into [0, span] with ping-pong behavior, where period = 2 * span.
pub fn ping_pong(t: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * span;
    let m = fmod(t, period);
    if m <= span {
        m
    } else {
        period - m
    }
}

/// Map `raw_time` into the timeline's time domain.
///
/// A non-positive duration cannot loop or clamp, so the raw time passes through.
pub fn effective_time(timeline: &Timeline, raw_time: f32) -> (f32, PlaybackStatus) {
    let duration = timeline.duration();
    if duration <= 0.0 {
        let status = if timeline.loop_mode == LoopMode::Once && raw_time > duration {
            PlaybackStatus::FinishedAtEnd
        } else {
            PlaybackStatus::Continuing
        };
        return (raw_time, status);
    }
    match timeline.loop_mode {
        LoopMode::Once => {
            let status = if raw_time > duration {
                PlaybackStatus::FinishedAtEnd
            } else {
                PlaybackStatus::Continuing
            };
            (raw_time.clamp(0.0, duration), status)
        }
        LoopMode::Loop => {
            let t = fmod(raw_time, duration);
            // Rounding can land exactly on `duration` for tiny negative inputs.
            let t = if t >= duration { 0.0 } else { t };
            (t, PlaybackStatus::Continuing)
        }
        LoopMode::PingPong => (ping_pong(raw_time, duration), PlaybackStatus::Continuing),
    }
}
