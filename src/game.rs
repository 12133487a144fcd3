//! Host-facing game wiring
//!
//! [`Game`] owns the whole per-frame pipeline: the velocity stage, the
//! steering state, the vector composer, and the game state itself. The host
//! supplies two kinds of events and nothing else:
//!
//! - `key_down(code)` whenever a key event occurs, at any rate
//! - `frame(now_ms)` once per frame with a monotonic timestamp
//!
//! Each `frame` call runs the stages in fixed order: velocity before
//! composition, composition before the fold, the fold before the liveness
//! gate. The returned state is the gate's output for this tick. If the host
//! stops calling `frame`, the last state simply stays valid; there is no
//! timeout or cancellation machinery.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::Config;
use crate::sim::{GameState, Steering, VectorComposer, VelocityStage, tick};
use crate::spawn::random_spawn;

/// Renderer boundary: receives each emitted state in order, exactly once
/// per tick, read-only.
pub trait SceneSink {
    fn present(&mut self, state: &GameState);
}

/// One run of the game: pipeline stages plus the evolving state
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    clock: VelocityStage,
    steering: Steering,
    composer: VectorComposer,
    state: GameState,
}

impl Game {
    /// Create a run with a seeded random spawn
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn = random_spawn(&mut rng, config.width, config.height);
        let state = GameState::new(spawn);
        log::info!(
            "{} spawned at {:?} (seed {})",
            state.icon,
            state.head(),
            seed
        );
        Self {
            clock: VelocityStage::new(config.velocity),
            steering: Steering::new(),
            composer: VectorComposer::new(),
            config,
            state,
        }
    }

    /// Feed a raw key event. Accepted direction changes update the
    /// composer's latest-direction input; repeats, reversals, and unknown
    /// keys are dropped here.
    pub fn key_down(&mut self, code: u32) {
        if let Some(dir) = self.steering.accept(code) {
            log::debug!("steer {:?}", dir);
            self.composer.set_direction(dir);
        }
    }

    /// Advance one tick with the given monotonic timestamp and return the
    /// resulting state.
    ///
    /// Before the first timestamp pair or the first accepted key, the
    /// composer has nothing to emit and the state is returned unchanged.
    pub fn frame(&mut self, now_ms: f64) -> &GameState {
        if let Some(speed) = self.clock.sample(now_ms) {
            self.composer.set_speed(speed);
        }
        if let Some(disp) = self.composer.sample() {
            tick(&mut self.state, disp, &self.config);
        }
        &self.state
    }

    /// Advance one tick and hand the result to the renderer sink
    pub fn frame_into(&mut self, now_ms: f64, sink: &mut impl SceneSink) {
        self.frame(now_ms);
        sink.present(&self.state);
    }

    /// Current state snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bearing, keys};

    /// One frame interval at 60 Hz, in ms
    const DT: f64 = 1000.0 / 60.0;

    fn run(game: &mut Game, frames: u32, start: f64) -> f64 {
        let mut now = start;
        for _ in 0..frames {
            now += DT;
            game.frame(now);
        }
        now
    }

    #[test]
    fn test_no_movement_before_first_key() {
        let mut game = Game::new(Config::default(), 1);
        let start = game.state().head();
        run(&mut game, 10, 0.0);
        assert_eq!(game.state().head(), start);
        assert_eq!(game.state().points.len(), 1);
        assert_eq!(game.state().bearing, Bearing::Unknown);
    }

    #[test]
    fn test_movement_after_key() {
        let mut game = Game::new(Config::default(), 1);
        let start = game.state().head();
        game.frame(0.0);
        game.key_down(keys::RIGHT);
        // 60 frames at 100 px/s is ~100 px of travel, unless the spawn was
        // close enough to the right edge to die first
        run(&mut game, 60, 0.0);
        let state = game.state();
        if state.alive {
            assert!((state.head().x - start.x - 100.0).abs() < 0.5);
            assert_eq!(state.head().y, start.y);
            assert_eq!(state.bearing, Bearing::Horizontal);
            // Spawn corner plus moving head
            assert_eq!(state.points.len(), 2);
        } else {
            assert!(state.head().x >= game.config().width);
        }
    }

    #[test]
    fn test_turn_adds_corner() {
        let config = Config {
            // Huge field so the scripted path cannot leave it
            width: 100_000.0,
            height: 100_000.0,
            ..Config::default()
        };
        let mut game = Game::new(config, 3);
        game.frame(0.0);
        game.key_down(keys::RIGHT);
        let now = run(&mut game, 30, 0.0);
        assert_eq!(game.state().points.len(), 2);

        game.key_down(keys::DOWN);
        run(&mut game, 30, now);
        let state = game.state();
        assert!(state.alive);
        assert_eq!(state.points.len(), 3);
        assert_eq!(state.bearing, Bearing::Vertical);
    }

    #[test]
    fn test_turns_at_frame_pace_survive() {
        // Default 500x400 field at real 60 Hz pacing: ~50 px per leg, with
        // directions picked toward the far side so bounds stay clear
        let mut game = Game::new(Config::default(), 11);
        game.frame(0.0);
        let spawn = game.state().head();
        let h_key = if spawn.x < 250.0 { keys::RIGHT } else { keys::LEFT };
        let v_key = if spawn.y < 200.0 { keys::DOWN } else { keys::UP };

        game.key_down(h_key);
        let now = run(&mut game, 30, 0.0);
        game.key_down(v_key);
        let now = run(&mut game, 30, now);
        game.key_down(h_key);
        run(&mut game, 30, now);

        let state = game.state();
        assert!(state.alive, "staircase path must not self-collide");
        assert_eq!(state.points.len(), 4);
        assert_eq!(state.bearing, Bearing::Horizontal);
        assert!(state.cause_of_death.is_none());
    }

    #[test]
    fn test_reversal_ignored_end_to_end() {
        let config = Config {
            width: 100_000.0,
            height: 100_000.0,
            ..Config::default()
        };
        let mut game = Game::new(config, 3);
        game.frame(0.0);
        game.key_down(keys::RIGHT);
        let now = run(&mut game, 10, 0.0);

        // Reversal must neither turn nor add a corner
        game.key_down(keys::LEFT);
        run(&mut game, 10, now);
        let state = game.state();
        assert_eq!(state.bearing, Bearing::Horizontal);
        assert_eq!(state.points.len(), 2);
    }

    #[test]
    fn test_sink_sees_every_tick() {
        struct Counter(u32);
        impl SceneSink for Counter {
            fn present(&mut self, _state: &GameState) {
                self.0 += 1;
            }
        }

        let mut game = Game::new(Config::default(), 5);
        let mut sink = Counter(0);
        let mut now = 0.0;
        for _ in 0..10 {
            game.frame_into(now, &mut sink);
            now += DT;
        }
        assert_eq!(sink.0, 10);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Game::new(Config::default(), 99);
        let mut b = Game::new(Config::default(), 99);
        for game in [&mut a, &mut b] {
            game.frame(0.0);
            game.key_down(keys::DOWN);
            run(game, 20, 0.0);
        }
        assert_eq!(a.state().points, b.state().points);
        assert_eq!(a.state().alive, b.state().alive);
        assert_eq!(a.state().icon, b.state().icon);
    }
}
