//! Built-in input sources: a demo autopilot and scripted replays

use super::InputSource;
use crate::sim::{GamePhase, GameState, TickInput};

/// Frames between autopilot shots
const FIRE_INTERVAL_FRAMES: u64 = 15;
/// Frames the autopilot waits on the game-over screen before retrying
const RETRY_DELAY_FRAMES: u64 = 90;
/// Seconds of ship velocity folded into the steering estimate
const STEER_LOOKAHEAD: f32 = 0.12;
/// Vertical clearance the autopilot tries to keep from a threat
const CLEARANCE: f32 = 24.0;
/// Obstacles further than this ahead of the ship are not yet threats
const THREAT_RANGE: f32 = 420.0;

/// Demo player: dodges the nearest incoming obstacle, shoots whatever is
/// level with the muzzle, retries after a pause, closes after `max_frames`.
#[derive(Debug, Clone)]
pub struct Autopilot {
    max_frames: Option<u64>,
    frame: u64,
    last_fire_frame: Option<u64>,
    game_over_frames: u64,
    thrust: bool,
    fire: bool,
    retry: bool,
}

impl Autopilot {
    /// Run until `max_frames` frames have been polled (`None` = forever)
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            max_frames,
            frame: 0,
            last_fire_frame: None,
            game_over_frames: 0,
            thrust: false,
            fire: false,
            retry: false,
        }
    }

    /// Where the ship's center should head this frame
    fn target_y(state: &GameState) -> f32 {
        let ship = state.ship.rect();
        let center = ship.center().y;

        // Closest obstacle still ahead of the ship's tail and within range
        let threat = state
            .active_obstacles()
            .filter(|o| {
                let r = o.rect();
                r.right() >= ship.left() && r.left() - ship.right() < THREAT_RANGE
            })
            .min_by(|a, b| {
                a.pos
                    .x
                    .partial_cmp(&b.pos.x)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(threat) = threat else {
            return state.viewport.height / 2.0;
        };

        let r = threat.rect();
        let in_lane = r.top() - CLEARANCE < ship.bottom() && r.bottom() + CLEARANCE > ship.top();
        if !in_lane {
            return center;
        }

        let above = r.top() - CLEARANCE - ship.size.y / 2.0;
        let below = r.bottom() + CLEARANCE + ship.size.y / 2.0;
        let room_above = above - ship.size.y / 2.0 >= 0.0;
        let room_below = below + ship.size.y / 2.0 <= state.viewport.height;

        match (room_above, room_below) {
            (true, true) => {
                if (center - above).abs() <= (below - center).abs() {
                    above
                } else {
                    below
                }
            }
            (true, false) => above,
            (false, true) => below,
            (false, false) => center,
        }
    }

    /// Anything live whose vertical span covers the muzzle, ahead of the ship
    fn has_shot(state: &GameState) -> bool {
        let muzzle = state.ship.muzzle();
        state.active_obstacles().any(|o| {
            let r = o.rect();
            r.left() > muzzle.x
                && r.left() < state.viewport.width
                && (r.top()..=r.bottom()).contains(&muzzle.y)
        })
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) {
        self.frame += 1;
        self.thrust = false;
        self.fire = false;
        self.retry = false;

        if state.phase == GamePhase::GameOver {
            self.game_over_frames += 1;
            self.retry = self.game_over_frames == RETRY_DELAY_FRAMES;
            return;
        }
        self.game_over_frames = 0;

        let predicted = state.ship.rect().center().y + state.ship.vel_y * STEER_LOOKAHEAD;
        self.thrust = predicted > Self::target_y(state);

        let cooled = self
            .last_fire_frame
            .is_none_or(|last| self.frame - last >= FIRE_INTERVAL_FRAMES);
        if cooled && Self::has_shot(state) {
            self.fire = true;
            self.last_fire_frame = Some(self.frame);
        }
    }

    fn is_thrust_held(&self) -> bool {
        self.thrust
    }

    fn is_fire_pressed(&self) -> bool {
        self.fire
    }

    fn is_retry_pressed(&self) -> bool {
        self.retry
    }

    fn is_close_requested(&self) -> bool {
        self.max_frames.is_some_and(|max| self.frame >= max)
    }
}

/// Replays a fixed list of per-frame inputs, then asks to close
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<TickInput>,
    cursor: usize,
    current: TickInput,
}

impl ScriptedInput {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self {
            frames,
            cursor: 0,
            current: TickInput::default(),
        }
    }

    /// Frames not yet replayed
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) {
        self.current = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
    }

    fn is_thrust_held(&self) -> bool {
        self.current.thrust
    }

    fn is_fire_pressed(&self) -> bool {
        self.current.fire
    }

    fn is_retry_pressed(&self) -> bool {
        self.current.retry
    }

    fn is_close_requested(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}
