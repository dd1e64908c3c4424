//! Game state and core simulation types
//!
//! Everything the renderer reads each frame lives here: the ship, the two
//! entity pools, score and phase.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::{Pool, Slot};
use super::prototype::PrototypeRegistry;
use super::rect::Rect;
use super::spawn::SpawnScheduler;
use crate::Viewport;
use crate::tuning::{ShipTuning, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Ship was hit; waits for retry
    GameOver,
}

/// Obstacle danger tiers, least to most dangerous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObstacleKind {
    Star,
    Scout,
    Raider,
    Warship,
    Mothership,
}

impl ObstacleKind {
    pub const COUNT: usize = 5;
    pub const ALL: [ObstacleKind; Self::COUNT] = [
        ObstacleKind::Star,
        ObstacleKind::Scout,
        ObstacleKind::Raider,
        ObstacleKind::Warship,
        ObstacleKind::Mothership,
    ];

    /// Slot in per-kind tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Danger tier, 1-based
    #[inline]
    pub fn tier(self) -> u32 {
        self as u32 + 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Star => "Star",
            ObstacleKind::Scout => "Scout",
            ObstacleKind::Raider => "Raider",
            ObstacleKind::Warship => "Warship",
            ObstacleKind::Mothership => "Mothership",
        }
    }
}

/// The player's craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    /// Vertical velocity (negative = up)
    pub vel_y: f32,
    pub size: Vec2,
    pub acceleration: f32,
    pub deceleration: f32,
}

impl Ship {
    pub fn new(tuning: &ShipTuning, viewport: Viewport) -> Self {
        let size = Vec2::new(tuning.width, tuning.height);
        Self {
            pos: Vec2::new(tuning.x, Self::initial_y(size.y, viewport)),
            vel_y: 0.0,
            size,
            acceleration: tuning.acceleration,
            deceleration: tuning.deceleration,
        }
    }

    /// Vertical middle of the screen, kept inside the clamp range
    fn initial_y(height: f32, viewport: Viewport) -> f32 {
        (viewport.height / 2.0).clamp(0.0, (viewport.height - height).max(0.0))
    }

    /// Back to the starting position with zero velocity
    pub fn reset(&mut self, viewport: Viewport) {
        self.pos.y = Self::initial_y(self.size.y, viewport);
        self.vel_y = 0.0;
    }

    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    /// Where projectiles leave the ship: right edge, vertical center
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x, self.pos.y + self.size.y / 2.0)
    }
}

/// A player projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Center of the projectile
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Projectile {
    /// Bounding box of the projectile circle (used for all collision tests)
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

impl Slot for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// An incoming obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: f32,
    /// Scaled bounding box size
    pub size: Vec2,
    /// Score awarded on destruction, deducted on escape
    pub points: i64,
    pub active: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }
}

impl Slot for Obstacle {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Something that happened during the last tick (for renderer/audio)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { id: u32 },
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    ObstacleDestroyed { id: u32, kind: ObstacleKind, points: i64 },
    ObstacleEscaped { id: u32, kind: ObstacleKind, penalty: i64 },
    ShipHit { obstacle_id: u32 },
    GameOver { score: i64 },
    Restarted,
}

/// Counters across the session (in memory only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Ticks since the session started
    pub frames: u64,
    /// Seconds spent in `Playing` during the current run
    pub run_time: f32,
    /// Highest score reached in any run this session
    pub best_score: i64,
    /// Runs started (the first run counts)
    pub runs: u32,
    pub destroyed: u32,
    pub escaped: u32,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub registry: PrototypeRegistry,
    pub scheduler: SpawnScheduler,
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Signed; escapes can push it below zero
    pub score: i64,
    pub ship: Ship,
    pub projectiles: Pool<Projectile>,
    pub obstacles: Pool<Obstacle>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub stats: SessionStats,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the built-in tuning and default viewport
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default(), Viewport::default())
    }

    /// `tuning` must already have passed `Tuning::validate`
    pub fn with_tuning(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        debug_assert!(
            tuning.validate().is_ok(),
            "unvalidated tuning: {:?}",
            tuning.validate()
        );
        log::info!(
            "New session: seed={} viewport={}x{}",
            seed,
            viewport.width,
            viewport.height
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            registry: PrototypeRegistry::new(&tuning),
            scheduler: SpawnScheduler::new(&tuning),
            ship: Ship::new(&tuning.ship, viewport),
            tuning,
            viewport,
            phase: GamePhase::Playing,
            score: 0,
            projectiles: Pool::new(),
            obstacles: Pool::new(),
            events: Vec::new(),
            stats: SessionStats {
                runs: 1,
                ..Default::default()
            },
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire one projectile from the ship's muzzle
    pub fn fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        let projectile = self.registry.clone_projectile(id, self.ship.muzzle());
        self.projectiles.admit(projectile);
        self.events.push(GameEvent::ProjectileFired { id });
        id
    }

    /// Clone one obstacle of `kind` with freshly rolled parameters and admit it
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind) -> u32 {
        let id = self.next_entity_id();
        let spawn = self.registry.roll_obstacle(kind, &mut self.rng, self.viewport);
        let obstacle = self.registry.clone_obstacle(id, kind, &spawn, self.viewport);
        log::debug!(
            "Spawn {} #{} at y={:.0} vx={:.0} scale={:.2}",
            kind.as_str(),
            id,
            spawn.y,
            spawn.speed,
            spawn.scale
        );
        self.obstacles.admit(obstacle);
        self.events.push(GameEvent::ObstacleSpawned { id, kind });
        id
    }

    /// Start a fresh run: empty pools, ship home, score and timers zeroed
    pub fn reset(&mut self) {
        self.projectiles.clear();
        self.obstacles.clear();
        self.ship.reset(self.viewport);
        self.score = 0;
        self.scheduler.reset();
        self.phase = GamePhase::Playing;
        self.stats.run_time = 0.0;
        self.stats.destroyed = 0;
        self.stats.escaped = 0;
        self.stats.runs += 1;
    }

    /// Live obstacles in slot order
    pub fn active_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter_active()
    }

    /// Live projectiles in slot order
    pub fn active_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter_active()
    }
}
