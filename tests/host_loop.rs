#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use court_ball::game_loop;
use court_ball::platform::InputSignals;
use court_ball::renderer::FrameLog;
use court_ball::*;
use glam::Vec2;

fn court() -> Court {
    Settings::default().court(480.0, 320.0).unwrap()
}

#[test]
fn test_timer_stops_itself_on_game_over() {
    let court = court();
    let start = GameState {
        ball_pos: Vec2::new(20.0, 300.0),
        ball_vel: Vec2::new(2.0, 2.0),
        paddle_x: 300.0,
        ..GameState::new(&court)
    };
    let notified = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&notified);

    let game = GameLoop::new(FrameEngine::with_state(court, start), FrameLog::new(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let handle = game_loop::start(game, Duration::from_millis(1)).unwrap();

    // Blocks until the losing tick breaks the timer
    let frames = loop {
        if !handle.is_running() {
            break handle.with(|game| game.renderer().frames());
        }
        thread::sleep(Duration::from_millis(2));
    };
    handle.join().unwrap();

    assert_eq!(notified.load(Ordering::SeqCst), 1);
    // 300 -> 302 -> ... -> 310, then the miss
    assert_eq!(frames, 6);
}

#[test]
fn test_stop_cancels_running_game() {
    let court = court();
    let game = GameLoop::new(FrameEngine::new(court), FrameLog::new(), || {});
    let handle = game_loop::start(game, Duration::from_millis(1)).unwrap();

    thread::sleep(Duration::from_millis(20));
    handle.stop();
    assert!(!handle.is_running());
    // Let a callback that was already in flight finish
    thread::sleep(Duration::from_millis(5));
    let ticks = handle.with(|game| game.engine().ticks());
    thread::sleep(Duration::from_millis(20));
    assert_eq!(handle.with(|game| game.engine().ticks()), ticks);
    assert_eq!(handle.phase(), HostPhase::Running);

    handle.join().unwrap();
}

#[test]
fn test_input_from_another_thread_moves_paddle() {
    let court = court();
    let start_x = GameState::new(&court).paddle_x;
    let game = GameLoop::new(FrameEngine::new(court), FrameLog::new(), || {});
    let handle = game_loop::start(game, Duration::from_millis(1)).unwrap();

    let sender = handle.sender();
    thread::spawn(move || sender.on_press(Direction::Right))
        .join()
        .unwrap();

    thread::sleep(Duration::from_millis(50));
    handle.stop();
    let state = handle.state();
    assert!(state.right_held);
    assert!(state.paddle_x > start_x);
    handle.join().unwrap();
}

#[test]
fn test_join_returns_loop_for_reset_and_restart() {
    let court = court();
    let start = GameState {
        ball_pos: Vec2::new(20.0, 300.0),
        ball_vel: Vec2::new(2.0, 2.0),
        paddle_x: 300.0,
        ..GameState::new(&court)
    };
    let game = GameLoop::new(FrameEngine::with_state(court, start), FrameLog::new(), || {});
    let handle = game_loop::start(game, Duration::from_millis(1)).unwrap();

    // No stop: join waits for the losing tick
    let game = handle.join().unwrap();
    assert_eq!(game.phase(), HostPhase::Over);
    let frozen = game.state();
    assert!(frozen.is_over);

    let last = game.renderer().last().unwrap();
    assert_eq!(last.ball.center, frozen.ball_pos);
    assert_eq!(last.paddle.origin.x, frozen.paddle_x);

    let game = game.reset(|| {});
    assert_eq!(game.state(), GameState::new(&court));
    assert_eq!(game.phase(), HostPhase::Running);

    let handle = game_loop::start(game, Duration::from_millis(1)).unwrap();
    assert!(handle.is_running());
    assert_eq!(handle.phase(), HostPhase::Running);

    handle.stop();
    let game = handle.join().unwrap();
    assert!(!game.state().is_over);
    assert!(game.renderer().frames() >= game.engine().ticks());
}
