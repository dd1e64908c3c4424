//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from the `dt` handed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (pool slot order, ids increase monotonically)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod pool;
pub mod prototype;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{ShipCollisions, resolve_projectile_hits, resolve_ship_hits};
pub use physics::{advance_obstacles, advance_projectiles};
pub use pool::{Pool, Slot};
pub use prototype::{ObstacleSpawn, PrototypeRegistry};
pub use rect::Rect;
pub use spawn::{SpawnScheduler, SpawnTimer};
pub use state::{
    GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Projectile, SessionStats, Ship,
};
pub use tick::{Action, TickInput, tick};
