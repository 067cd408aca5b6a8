//! Whole-game scenario tests driving the public API only.

use glam::Vec2;

use breakout::config::LevelConfig;
use breakout::sim::level::parse_tile_grid;
use breakout::sim::state::{ObjectStatus, SurfaceMode};
use breakout::sim::{FrameInput, GameState, GameStatus, Level, tick};

const DT: f32 = 1.0 / 60.0;

fn game(tiles: Vec<Vec<u32>>, seed: u64) -> GameState {
    let level = Level::new(LevelConfig::with_tiles(tiles), seed).expect("valid level");
    GameState::new(vec![level])
}

/// Track the ball with the paddle, launching on the first frame.
fn chase_input(state: &GameState, frame: u32) -> FrameInput {
    let level = &state.levels[state.current];
    let ball_center = level.ball.attrs.position.x + level.ball.radius;
    let paddle_center = level.paddle.attrs.position.x + level.paddle.attrs.size.x / 2.0;
    FrameInput {
        move_left: ball_center < paddle_center - 5.0,
        move_right: ball_center > paddle_center + 5.0,
        launch: frame == 0,
    }
}

#[test]
fn same_seed_same_outcome() {
    let tiles = parse_tile_grid(include_str!("../assets/levels/one.txt")).expect("valid map");
    let mut a = game(tiles.clone(), 1234);
    let mut b = game(tiles, 1234);
    for frame in 0..1800 {
        let input_a = chase_input(&a, frame);
        let input_b = chase_input(&b, frame);
        tick(&mut a, &input_a, DT);
        tick(&mut b, &input_b, DT);
    }
    let (la, lb) = (&a.levels[0], &b.levels[0]);
    assert_eq!(la.ball.attrs.position, lb.ball.attrs.position);
    assert_eq!(la.ball.velocity, lb.ball.velocity);
    let alive = |l: &Level| {
        l.bricks
            .iter()
            .map(|b| b.attrs.is_alive())
            .collect::<Vec<_>>()
    };
    assert_eq!(alive(la), alive(lb));
    assert_eq!(la.power_ups.len(), lb.power_ups.len());
}

#[test]
fn shipped_maps_parse_and_build() {
    for text in [
        include_str!("../assets/levels/one.txt"),
        include_str!("../assets/levels/two.txt"),
    ] {
        let tiles = parse_tile_grid(text).expect("valid map");
        let level = Level::new(LevelConfig::with_tiles(tiles), 0).expect("buildable level");
        assert!(!level.bricks.is_empty());
        // Bricks tile the top half of the playfield
        for brick in &level.bricks {
            assert!(brick.attrs.position.y + brick.attrs.size.y <= level.config.height / 2.0 + 1e-3);
        }
    }
}

#[test]
fn extended_play_destroys_bricks() {
    let tiles = parse_tile_grid(include_str!("../assets/levels/one.txt")).expect("valid map");
    let total = tiles.iter().flatten().filter(|&&t| t >= 2).count();
    let mut state = game(tiles, 7);
    for frame in 0..3600 {
        let input = chase_input(&state, frame);
        tick(&mut state, &input, DT);
    }
    let destroyed = state.levels[0]
        .bricks
        .iter()
        .filter(|b| b.attrs.status == ObjectStatus::Destroyed)
        .count();
    assert!(destroyed > 0, "a minute of play should break something");
    assert!(destroyed <= total);
}

#[test]
fn speed_is_preserved_across_bounces() {
    let tiles = parse_tile_grid(include_str!("../assets/levels/one.txt")).expect("valid map");
    let mut state = game(tiles, 99);
    for frame in 0..1800 {
        let input = chase_input(&state, frame);
        tick(&mut state, &input, DT);
        let ball = &state.levels[0].ball;
        if ball.surface == SurfaceMode::Reflect && ball.velocity != Vec2::ZERO {
            let speed = ball.velocity.length();
            assert!(
                (speed - ball.speed).abs() < 1.0,
                "speed drifted to {speed} on frame {frame}"
            );
        }
    }
}

#[test]
fn tuning_override_reaches_the_simulation() {
    let json = r#"{ "player": { "velocity": 250.0 }, "ball": { "speed": 200.0 } }"#;
    let mut config: LevelConfig = serde_json::from_str(json).expect("valid tuning");
    config.tiles = vec![vec![2, 2, 2]];
    let level = Level::new(config, 0).expect("valid level");
    let mut state = GameState::new(vec![level]);
    tick(
        &mut state,
        &FrameInput {
            launch: true,
            ..FrameInput::default()
        },
        DT,
    );
    let level = &state.levels[0];
    assert_eq!(level.paddle.velocity, 250.0);
    assert!((level.ball.velocity.length() - 200.0).abs() < 1.0);
}

#[test]
fn only_the_current_level_updates() {
    let tiles = vec![vec![2, 2]];
    let first = Level::new(LevelConfig::with_tiles(tiles.clone()), 0).expect("valid level");
    let second = Level::new(LevelConfig::with_tiles(tiles), 0).expect("valid level");
    let mut state = GameState::new(vec![first, second]);
    state.current = 1;
    let input = FrameInput {
        move_right: true,
        ..FrameInput::default()
    };
    tick(&mut state, &input, DT);
    let home_x = state.levels[1].config.width / 2.0 - state.levels[1].paddle.attrs.size.x / 2.0;
    assert_eq!(state.levels[0].paddle.attrs.position.x, home_x);
    assert!(state.levels[1].paddle.attrs.position.x > home_x);
}

#[test]
fn frozen_states_do_not_simulate() {
    for status in [GameStatus::Menu, GameStatus::Win] {
        let mut state = game(vec![vec![2, 2]], 0);
        state.status = status;
        let before = state.levels[0].ball.attrs.position;
        tick(
            &mut state,
            &FrameInput {
                launch: true,
                ..FrameInput::default()
            },
            DT,
        );
        assert_eq!(state.levels[0].ball.attrs.position, before);
        assert_eq!(state.levels[0].ball.surface, SurfaceMode::Sticky);
    }
}
