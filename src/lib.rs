//! Sky Dodger - A side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, physics, collisions, game state)
//! - `platform`: Clock / input / renderer seams and their native implementations
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{ObstacleTuning, ProjectileTuning, ShipTuning, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the main loop
    pub const TARGET_FPS: u32 = 60;
    /// Frame time at the target rate (also the fixed step for headless runs)
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Longest frame the clock will report (stall guard)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;

    /// Obstacles spawn this far past the right edge of the viewport
    pub const OFFSCREEN_MARGIN: f32 = 50.0;

    /// Ship defaults
    pub const SHIP_X: f32 = 200.0;
    pub const SHIP_WIDTH: f32 = 64.0;
    pub const SHIP_HEIGHT: f32 = 40.0;
    pub const SHIP_ACCELERATION: f32 = 1500.0;
    pub const SHIP_DECELERATION: f32 = 1500.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 500.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
}

/// Viewport bounds in world units (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(consts::VIEWPORT_WIDTH, consts::VIEWPORT_HEIGHT)
    }
}

/// Sample uniformly from `[lo, hi]`, tolerating a degenerate range
#[inline]
pub fn sample_span<R: rand::Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if lo == hi {
        lo
    } else {
        rng.random_range(lo..=hi)
    }
}
