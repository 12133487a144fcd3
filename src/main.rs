//! Light Cycle entry point
//!
//! Headless demo: drives the simulation pipeline at a synthetic 60 Hz with a
//! scripted steering sequence, then dumps the final state as JSON. Wire a
//! real renderer and key source against [`lightcycle::Game`] the same way.

use std::time::{SystemTime, UNIX_EPOCH};

use lightcycle::sim::{GameState, keys};
use lightcycle::{Config, Game, SceneSink};

/// Sink that traces every emitted state
struct LogSink;

impl SceneSink for LogSink {
    fn present(&mut self, state: &GameState) {
        log::trace!(
            "tick: head={:?} bearing={:?} alive={}",
            state.head(),
            state.bearing,
            state.alive
        );
    }
}

fn main() {
    env_logger::init();
    log::info!("Light Cycle (headless demo) starting...");

    let config = Config::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xC0FFEE);
    let mut game = Game::new(config.clone(), seed);
    let mut sink = LogSink;

    // Scripted steering: frame number -> key code
    let script: &[(u32, u32)] = &[
        (1, keys::RIGHT),
        (120, keys::DOWN),
        (240, keys::LEFT),
        (360, keys::UP),
    ];

    let dt = config.frame_interval_ms();
    let mut now = 0.0;
    for frame in 0..600u32 {
        for &(at, code) in script {
            if frame == at {
                game.key_down(code);
            }
        }
        now += dt;
        game.frame_into(now, &mut sink);
        if !game.state().alive {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "run finished: alive={} trail={} corners",
        state.alive,
        state.points.len()
    );
    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot failed: {e}"),
    }
}
