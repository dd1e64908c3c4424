//! Collision detection and scoring
//!
//! Two sub-passes, always in this order:
//! 1. projectiles against obstacles (awards points)
//! 2. the ship against whatever obstacles survived (ends the run)
//!
//! Projectiles are tested through the bounding box of their circle.
//! Entities are only ever deactivated here, never removed, so slot indices
//! stay valid for the whole pass.

use super::pool::{Pool, Slot};
use super::state::{GameEvent, Obstacle, Projectile, Ship};

/// Outcome of the ship sub-pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipCollisions {
    /// Ids of every obstacle that struck the ship this frame
    pub obstacle_ids: Vec<u32>,
}

impl ShipCollisions {
    pub fn is_hit(&self) -> bool {
        !self.obstacle_ids.is_empty()
    }
}

/// Projectile × obstacle. Each live obstacle consumes at most one projectile
/// per frame: the first live projectile (in slot order) that overlaps it.
/// Returns the number of obstacles destroyed.
pub fn resolve_projectile_hits(
    projectiles: &mut Pool<Projectile>,
    obstacles: &mut Pool<Obstacle>,
    score: &mut i64,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut destroyed = 0;
    for obstacle in obstacles.iter_active_mut() {
        let bounds = obstacle.rect();
        let Some(projectile) = projectiles
            .iter_active_mut()
            .find(|p| p.bounds().overlaps(&bounds))
        else {
            continue;
        };

        projectile.deactivate();
        obstacle.deactivate();
        *score += obstacle.points;
        destroyed += 1;

        log::debug!(
            "Projectile #{} destroyed {} #{} (+{})",
            projectile.id,
            obstacle.kind.as_str(),
            obstacle.id,
            obstacle.points
        );
        events.push(GameEvent::ObstacleDestroyed {
            id: obstacle.id,
            kind: obstacle.kind,
            points: obstacle.points,
        });
    }
    destroyed
}

/// Ship × obstacle. Every overlapping obstacle is deactivated (no early exit);
/// the caller turns a non-empty result into a single phase transition.
pub fn resolve_ship_hits(
    ship: &Ship,
    obstacles: &mut Pool<Obstacle>,
    events: &mut Vec<GameEvent>,
) -> ShipCollisions {
    let ship_rect = ship.rect();
    let mut result = ShipCollisions::default();
    for obstacle in obstacles.iter_active_mut() {
        if obstacle.rect().overlaps(&ship_rect) {
            obstacle.deactivate();
            result.obstacle_ids.push(obstacle.id);
            log::debug!("Ship struck by {} #{}", obstacle.kind.as_str(), obstacle.id);
            events.push(GameEvent::ShipHit {
                obstacle_id: obstacle.id,
            });
        }
    }
    result
}
