//! Timeline evaluation.
//!
//! Model:
//! - Raw time is first mapped through the loop mode (see `time.rs`).
//! - The segment is bracketed by the last keyframe at or before that time.
//! - Segment [Ki -> K(i+1)] eases with K(i+1)'s curve and aligns with
//!   K(i+1)'s offset: the keyframe being arrived at governs the transition.
//! - In `Loop` mode, slack after the last keyframe forms a wrap segment
//!   [Klast -> K0] that follows the same rule, so K0 governs it.
//! - Instant keyframes and near-zero segments snap to the destination.

use crate::config::Config;
use crate::data::{Keyframe, LoopMode, Timeline};
use crate::outputs::{BlendState, PlaybackStatus};
use crate::time::effective_time;

/// Index of the last keyframe with `time <= t`, or `None` before the first.
pub fn find_prev_index(keyframes: &[Keyframe], t: f32) -> Option<usize> {
    keyframes.partition_point(|k| k.time <= t).checked_sub(1)
}

/// Evaluate `timeline` at `raw_time` with default thresholds.
pub fn evaluate(timeline: &Timeline, raw_time: f32) -> (BlendState<'_>, PlaybackStatus) {
    evaluate_with(&Config::default(), timeline, raw_time)
}

/// Evaluate `timeline` at `raw_time`. Never fails: missing data produces an
/// empty state and degenerate segments snap.
pub fn evaluate_with<'a>(
    cfg: &Config,
    timeline: &'a Timeline,
    raw_time: f32,
) -> (BlendState<'a>, PlaybackStatus) {
    let (t, status) = effective_time(timeline, raw_time);
    let keys = &timeline.keyframes;
    let (first, last) = match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return (BlendState::empty(), PlaybackStatus::Continuing),
    };
    let last_index = keys.len() - 1;

    let state = match find_prev_index(keys, t) {
        None => BlendState::hold(first),
        Some(prev) if prev == last_index => {
            let duration = timeline.duration();
            if timeline.loop_mode == LoopMode::Loop && duration > last.time {
                let wrap = (duration - last.time) + first.time;
                segment(cfg, last, first, t - last.time, wrap)
            } else {
                BlendState::hold(last)
            }
        }
        Some(prev) => {
            let from = &keys[prev];
            let to = &keys[prev + 1];
            segment(cfg, from, to, t - from.time, to.time - from.time)
        }
    };
    (state, status)
}

/// Blend `elapsed` into a segment of length `span` from `from` to `to`.
fn segment<'a>(
    cfg: &Config,
    from: &'a Keyframe,
    to: &'a Keyframe,
    elapsed: f32,
    span: f32,
) -> BlendState<'a> {
    if to.instant || span < cfg.segment_epsilon {
        return BlendState::hold(to);
    }
    let linear = elapsed / span;
    BlendState::between(from, to, to.curve.sample(linear))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(times: &[f32]) -> Vec<Keyframe> {
        times.iter().map(|t| Keyframe::new(*t, None)).collect()
    }

    #[test]
    fn prev_index_brackets() {
        let k = keys(&[0.5, 1.0, 1.0, 2.0]);
        assert_eq!(find_prev_index(&k, 0.0), None);
        assert_eq!(find_prev_index(&k, 0.5), Some(0));
        assert_eq!(find_prev_index(&k, 1.0), Some(2));
        assert_eq!(find_prev_index(&k, 1.5), Some(2));
        assert_eq!(find_prev_index(&k, 9.0), Some(3));
        assert_eq!(find_prev_index(&[], 1.0), None);
    }

    #[test]
    fn empty_timeline_is_empty_state() {
        let tl = Timeline::new(LoopMode::Once);
        let (state, status) = evaluate(&tl, 5.0);
        assert!(state.is_empty());
        assert_eq!(status, PlaybackStatus::Continuing);
    }
}
