use std::sync::Arc;

use contour_morph_core::{
    data::{Keyframe, LoopMode, Timeline},
    outputs::PlaybackStatus,
    player::{Player, PlayerCommand},
    shape::Shape,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn timeline(mode: LoopMode) -> Timeline {
    let a = Arc::new(Shape::bake(&[[0.0, 1.0], [-1.0, 0.0], [1.0, 0.0]], 12).unwrap());
    let b = Arc::new(Shape::bake(&[[1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0], [1.0, -1.0]], 12).unwrap());
    Timeline::new(mode).with_keyframes(vec![Keyframe::new(0.0, Some(a)), Keyframe::new(1.0, Some(b))])
}

#[test]
fn paused_player_does_not_advance() {
    let tl = timeline(LoopMode::Loop);
    let mut player = Player::new();
    player.tick(0.5, &tl);
    approx(player.time, 0.0, 0.0);

    player.apply(PlayerCommand::Play);
    let (state, _) = player.tick(0.25, &tl);
    approx(player.time, 0.25, 1e-6);
    approx(state.blend, 0.25, 1e-6);

    player.apply(PlayerCommand::Pause);
    player.tick(0.25, &tl);
    approx(player.time, 0.25, 1e-6);

    player.apply(PlayerCommand::Resume);
    player.tick(0.25, &tl);
    approx(player.time, 0.5, 1e-6);
}

#[test]
fn once_playback_stops_at_end() {
    let tl = timeline(LoopMode::Once);
    let mut player = Player::new();
    player.apply(PlayerCommand::Play);

    let mut finished = 0;
    for _ in 0..10 {
        let (_, status) = player.tick(0.3, &tl);
        if status == PlaybackStatus::FinishedAtEnd {
            finished += 1;
        }
    }
    assert!(!player.playing);
    // stopped advancing on the first overrun tick
    approx(player.time, 1.2, 1e-5);
    assert_eq!(finished, 7);

    player.apply(PlayerCommand::Play);
    assert!(player.playing);
    approx(player.time, 0.0, 0.0);
}

#[test]
fn loop_playback_keeps_running() {
    let tl = timeline(LoopMode::Loop);
    let mut player = Player::new();
    player.apply(PlayerCommand::Play);
    player.apply(PlayerCommand::SetSpeed { speed: 2.0 });
    for _ in 0..20 {
        let (_, status) = player.tick(0.1, &tl);
        assert_eq!(status, PlaybackStatus::Continuing);
    }
    assert!(player.playing);
    approx(player.time, 4.0, 1e-4);
}

#[test]
fn seek_and_stop_drive_sampling() {
    let tl = timeline(LoopMode::Once);
    let mut player = Player::new();
    player.apply(PlayerCommand::Seek { time: 0.75 });
    let (state, _) = player.sample(&tl);
    approx(state.blend, 0.75, 1e-6);

    player.apply(PlayerCommand::Seek { time: f32::NAN });
    approx(player.time, 0.75, 0.0);

    player.apply(PlayerCommand::Stop);
    assert!(!player.playing);
    approx(player.time, 0.0, 0.0);
}
