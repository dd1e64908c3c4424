//! Per-frame simulation tick
//!
//! Pass order is fixed: input actions → spawn timers → motion → collisions →
//! phase transition. Nothing runs while the game is over except retry.

use super::collision::{resolve_projectile_hits, resolve_ship_hits};
use super::physics::{advance_obstacles, advance_projectiles};
use super::state::{GameEvent, GamePhase, GameState};

/// Input signals for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust held (level-triggered)
    pub thrust: bool,
    /// Fire pressed this frame (edge-triggered)
    pub fire: bool,
    /// Retry pressed this frame (edge-triggered)
    pub retry: bool,
}

/// Player intent, dispatched once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Thrust,
    Fire,
    Retry,
}

impl TickInput {
    /// Actions requested this frame, in dispatch order
    pub fn actions(&self) -> impl Iterator<Item = Action> {
        [
            (self.thrust, Action::Thrust),
            (self.fire, Action::Fire),
            (self.retry, Action::Retry),
        ]
        .into_iter()
        .filter_map(|(on, action)| on.then_some(action))
    }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    state.events.clear();
    state.stats.frames += 1;

    let mut thrust = false;
    for action in input.actions() {
        match (state.phase, action) {
            (GamePhase::Playing, Action::Thrust) => thrust = true,
            (GamePhase::Playing, Action::Fire) => {
                state.fire();
            }
            (GamePhase::GameOver, Action::Retry) => {
                state.reset();
                state.events.push(GameEvent::Restarted);
                log::info!("Run {} started", state.stats.runs);
                return;
            }
            _ => {}
        }
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.stats.run_time += dt;

    // Spawn timers
    for kind in state.scheduler.advance(dt) {
        state.spawn_obstacle(kind);
    }

    // Motion
    state.ship.fly(thrust, dt, state.viewport.height);
    advance_projectiles(&mut state.projectiles, dt, state.viewport.width);
    state.stats.escaped += advance_obstacles(
        &mut state.obstacles,
        dt,
        &mut state.score,
        &mut state.events,
    );

    // Collisions
    state.stats.destroyed += resolve_projectile_hits(
        &mut state.projectiles,
        &mut state.obstacles,
        &mut state.score,
        &mut state.events,
    );
    let ship_hits = resolve_ship_hits(&state.ship, &mut state.obstacles, &mut state.events);

    state.stats.best_score = state.stats.best_score.max(state.score);

    // Phase transition
    if ship_hits.is_hit() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: score={} best={} time={:.1}s",
            state.score,
            state.stats.best_score,
            state.stats.run_time
        );
    }

    state.projectiles.maintain();
    state.obstacles.maintain();
}
