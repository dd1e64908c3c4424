use glam::Vec2;

use sky_dodger::consts::FRAME_DT;
use sky_dodger::platform::{Autopilot, FrameClock, ScriptedInput, StatusRenderer, run_frame};
use sky_dodger::sim::{
    GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, ObstacleSpawn, TickInput, tick,
};
use sky_dodger::{Tuning, Viewport};

/// Built-in balance with spawn periods long enough that nothing spawns
fn quiet_tuning() -> Tuning {
    let mut tuning = Tuning::default();
    for entry in tuning.obstacles.iter_mut() {
        entry.spawn_period *= 1000.0;
    }
    tuning
}

fn quiet_state(viewport: Viewport) -> GameState {
    GameState::with_tuning(7, quiet_tuning(), viewport)
}

fn admit_obstacle(state: &mut GameState, kind: ObstacleKind, spawn: ObstacleSpawn) -> u32 {
    let id = state.next_entity_id();
    let obstacle = state.registry.clone_obstacle(id, kind, &spawn, state.viewport);
    state.obstacles.admit(obstacle);
    id
}

#[test]
fn thrust_one_second_from_300_in_tall_viewport() {
    let mut state = quiet_state(Viewport::new(1280.0, 4000.0));
    state.ship.pos.y = 300.0 + 1000.0;
    let start = state.ship.pos.y;
    let thrust = TickInput {
        thrust: true,
        ..Default::default()
    };

    for _ in 0..60 {
        tick(&mut state, &thrust, FRAME_DT);
    }

    assert!((state.ship.vel_y + 1500.0).abs() < 0.5);
    let moved = state.ship.pos.y - start;
    assert!((moved + 762.5).abs() < 0.5, "moved {moved}");
}

#[test]
fn thrust_one_second_from_300_clamps_at_top() {
    let mut state = quiet_state(Viewport::default());
    state.ship.pos.y = 300.0;
    let thrust = TickInput {
        thrust: true,
        ..Default::default()
    };

    for _ in 0..60 {
        tick(&mut state, &thrust, FRAME_DT);
        assert!(state.ship.pos.y >= 0.0);
    }

    assert_eq!(state.ship.pos.y, 0.0);
    assert_eq!(state.ship.vel_y, 0.0);
}

#[test]
fn escaped_obstacle_costs_its_points() {
    let mut state = quiet_state(Viewport::default());
    let id = admit_obstacle(
        &mut state,
        ObstacleKind::Raider,
        ObstacleSpawn {
            y: 10.0,
            speed: -150.0,
            scale: 0.5,
        },
    );
    assert_eq!(state.active_obstacles().next().unwrap().pos.x, 1280.0 + 50.0);

    let mut escaped_at = None;
    for frame in 0..(60 * 15) {
        tick(&mut state, &TickInput::default(), FRAME_DT);
        if state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::ObstacleEscaped { id: eid, .. } if *eid == id))
        {
            escaped_at = Some(frame);
            break;
        }
        assert_eq!(state.score, 0);
    }

    assert!(escaped_at.is_some());
    assert_eq!(state.score, -3);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.stats.escaped, 1);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn projectile_hit_scores_once() {
    let mut state = quiet_state(Viewport::default());
    admit_obstacle(
        &mut state,
        ObstacleKind::Raider,
        ObstacleSpawn {
            y: 180.0,
            speed: -150.0,
            scale: 0.5,
        },
    );
    // Move the obstacle onto (100, 200)
    state.obstacles.get_mut(0).unwrap().pos.x = 80.0;

    let hit_id = state.next_entity_id();
    let miss_id = state.next_entity_id();
    let hit = state.registry.clone_projectile(hit_id, Vec2::new(100.0, 200.0));
    let miss = state.registry.clone_projectile(miss_id, Vec2::new(600.0, 100.0));
    state.projectiles.admit(hit);
    state.projectiles.admit(miss);

    tick(&mut state, &TickInput::default(), FRAME_DT);

    assert_eq!(state.score, 3);
    assert!(state.obstacles.is_empty());
    let live: Vec<u32> = state.active_projectiles().map(|p| p.id).collect();
    assert_eq!(live, vec![miss_id]);

    // Nothing left for the second projectile to hit on later frames
    for _ in 0..30 {
        tick(&mut state, &TickInput::default(), FRAME_DT);
    }
    assert_eq!(state.score, 3);
    assert_eq!(state.stats.destroyed, 1);
}

#[test]
fn full_session_with_scripted_input() {
    let mut state = GameState::new(2024);
    let mut clock = FrameClock::fixed(Viewport::default());
    let mut frames = vec![TickInput::default(); 60 * 30];
    for (i, frame) in frames.iter_mut().enumerate() {
        frame.thrust = i % 3 != 0;
        frame.fire = i % 10 == 0;
    }
    let mut input = ScriptedInput::new(frames);
    let mut renderer = StatusRenderer::new();

    while run_frame(&mut state, &mut clock, &mut input, &mut renderer) {}

    assert_eq!(renderer.frames(), 60 * 30);
    assert_eq!(state.stats.frames, 60 * 30);
    assert!(state.ship.pos.y >= 0.0);
    assert!(state.ship.pos.y <= state.viewport.height - state.ship.size.y);
}

#[test]
fn autopilot_session_runs_to_its_frame_limit() {
    let mut state = GameState::new(11);
    let mut clock = FrameClock::fixed(Viewport::default());
    let mut input = Autopilot::new(Some(60 * 90));
    let mut renderer = StatusRenderer::new();

    while run_frame(&mut state, &mut clock, &mut input, &mut renderer) {}

    assert_eq!(state.stats.frames, 60 * 90);
    assert!(state.stats.best_score >= state.score.max(0));
}

#[test]
fn autopilot_retries_after_unavoidable_crash() {
    let mut state = GameState::new(11);
    // A stationary wall across the ship's whole column
    let id = state.next_entity_id();
    let ship = state.ship.rect();
    state.obstacles.admit(Obstacle {
        id,
        kind: ObstacleKind::Mothership,
        pos: Vec2::new(ship.left() - 10.0, 0.0),
        vel: Vec2::ZERO,
        scale: 1.0,
        size: Vec2::new(ship.size.x + 20.0, state.viewport.height),
        points: 5,
        active: true,
    });

    let mut clock = FrameClock::fixed(Viewport::default());
    let mut input = Autopilot::new(Some(60 * 5));
    let mut renderer = StatusRenderer::new();
    let mut crashed_on = None;
    let mut restarted_on = None;

    while run_frame(&mut state, &mut clock, &mut input, &mut renderer) {
        for event in &state.events {
            match event {
                GameEvent::GameOver { .. } => {
                    crashed_on = crashed_on.or(Some(state.stats.frames));
                }
                GameEvent::Restarted => {
                    restarted_on = restarted_on.or(Some(state.stats.frames));
                }
                _ => {}
            }
        }
    }

    assert_eq!(crashed_on, Some(1));
    let restarted_on = restarted_on.expect("autopilot never retried");
    assert!(restarted_on > 1);
    assert!(state.stats.runs >= 2);
}

#[test]
fn retry_after_crash_starts_clean_run() {
    let mut state = GameState::new(3);
    // Sit on the floor until something flies into the ship
    let mut frame = 0;
    while state.phase == GamePhase::Playing && frame < 60 * 600 {
        tick(&mut state, &TickInput::default(), FRAME_DT);
        frame += 1;
    }
    assert_eq!(state.phase, GamePhase::GameOver);

    tick(
        &mut state,
        &TickInput {
            retry: true,
            ..Default::default()
        },
        FRAME_DT,
    );

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert!(state.obstacles.is_empty());
    assert!(state.projectiles.is_empty());
    assert_eq!(state.stats.runs, 2);
}
