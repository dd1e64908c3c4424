//! Prototype registry: one canonical instance per entity kind
//!
//! Live entities are produced by copying a prototype and overwriting every
//! per-spawn field. Prototypes are never mutated after construction.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, ObstacleKind, Projectile};
use crate::consts::OFFSCREEN_MARGIN;
use crate::tuning::{ObstacleTuning, Tuning};
use crate::{Viewport, sample_span};

/// Randomized parameters for one obstacle spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawn {
    /// Top edge of the obstacle
    pub y: f32,
    /// Horizontal velocity (negative)
    pub speed: f32,
    pub scale: f32,
}

/// Canonical prototypes plus the ranges used to parameterize clones
#[derive(Debug, Clone)]
pub struct PrototypeRegistry {
    projectile: Projectile,
    obstacles: [Obstacle; ObstacleKind::COUNT],
    ranges: [ObstacleTuning; ObstacleKind::COUNT],
}

impl PrototypeRegistry {
    pub fn new(tuning: &Tuning) -> Self {
        let projectile = Projectile {
            id: 0,
            pos: Vec2::ZERO,
            vel: Vec2::new(tuning.projectile.speed, 0.0),
            radius: tuning.projectile.radius,
            active: false,
        };
        let obstacles = ObstacleKind::ALL.map(|kind| {
            let entry = tuning.obstacle(kind);
            Obstacle {
                id: 0,
                kind,
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                scale: 1.0,
                size: entry.base_size,
                points: entry.points,
                active: false,
            }
        });
        Self {
            projectile,
            obstacles,
            ranges: tuning.obstacles.clone(),
        }
    }

    pub fn projectile_prototype(&self) -> &Projectile {
        &self.projectile
    }

    pub fn obstacle_prototype(&self, kind: ObstacleKind) -> &Obstacle {
        &self.obstacles[kind.index()]
    }

    /// Draw spawn parameters for `kind`: y in `[0, viewport height]`,
    /// speed and scale uniform in the kind's ranges
    pub fn roll_obstacle<R: Rng + ?Sized>(
        &self,
        kind: ObstacleKind,
        rng: &mut R,
        viewport: Viewport,
    ) -> ObstacleSpawn {
        let range = &self.ranges[kind.index()];
        ObstacleSpawn {
            y: sample_span(rng, 0.0, viewport.height.max(0.0)),
            speed: sample_span(rng, range.speed_min, range.speed_max),
            scale: sample_span(rng, range.scale_min, range.scale_max),
        }
    }

    /// Live projectile at the muzzle point, moving right
    pub fn clone_projectile(&self, id: u32, muzzle: Vec2) -> Projectile {
        let proto = &self.projectile;
        Projectile {
            id,
            pos: muzzle,
            vel: proto.vel,
            radius: proto.radius,
            active: true,
        }
    }

    /// Live obstacle just past the right edge of the viewport
    pub fn clone_obstacle(
        &self,
        id: u32,
        kind: ObstacleKind,
        spawn: &ObstacleSpawn,
        viewport: Viewport,
    ) -> Obstacle {
        let proto = &self.obstacles[kind.index()];
        Obstacle {
            id,
            kind,
            pos: Vec2::new(viewport.width + OFFSCREEN_MARGIN, spawn.y),
            vel: Vec2::new(spawn.speed, 0.0),
            scale: spawn.scale,
            size: proto.size * spawn.scale,
            points: proto.points,
            active: true,
        }
    }
}
