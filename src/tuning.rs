//! Data-driven game balance
//!
//! The built-in table (`Tuning::default()`) is the canonical balance. A JSON
//! override with the same shape can be loaded at startup; it is validated
//! before the simulation ever sees it, so the core can treat every value as
//! well-formed.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::ObstacleKind;

/// Ship handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipTuning {
    /// Fixed horizontal position of the ship's left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Upward acceleration while thrust is held (units/s²)
    pub acceleration: f32,
    /// Downward acceleration otherwise (units/s²)
    pub deceleration: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            x: SHIP_X,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            acceleration: SHIP_ACCELERATION,
            deceleration: SHIP_DECELERATION,
        }
    }
}

/// Player projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileTuning {
    /// Rightward speed in units per second
    pub speed: f32,
    /// Collision radius in units
    pub radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            radius: PROJECTILE_RADIUS,
        }
    }
}

/// Per-kind obstacle parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleTuning {
    pub kind: ObstacleKind,
    /// Score awarded on destruction, deducted on escape
    pub points: i64,
    /// Seconds between spawns
    pub spawn_period: f32,
    /// Horizontal velocity range (both negative, units/s)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Scale range applied to `base_size`
    pub scale_min: f32,
    pub scale_max: f32,
    /// Unscaled bounding box
    pub base_size: Vec2,
}

impl ObstacleTuning {
    /// Built-in balance for a kind
    pub fn builtin(kind: ObstacleKind) -> Self {
        let (speed_min, speed_max, scale_min, scale_max) = match kind {
            ObstacleKind::Star => (-200.0, -120.0, 0.4, 0.8),
            ObstacleKind::Scout => (-240.0, -150.0, 0.5, 0.9),
            ObstacleKind::Raider => (-280.0, -170.0, 0.6, 1.0),
            ObstacleKind::Warship => (-320.0, -190.0, 0.7, 1.1),
            ObstacleKind::Mothership => (-360.0, -210.0, 0.8, 1.2),
        };
        let tier = kind.tier();
        Self {
            kind,
            points: tier as i64,
            spawn_period: tier as f32,
            speed_min,
            speed_max,
            scale_min,
            scale_max,
            base_size: Vec2::new(96.0, 96.0),
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    #[serde(default)]
    pub ship: ShipTuning,
    #[serde(default)]
    pub projectile: ProjectileTuning,
    /// One entry per kind, in `ObstacleKind::ALL` order
    pub obstacles: [ObstacleTuning; ObstacleKind::COUNT],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship: ShipTuning::default(),
            projectile: ProjectileTuning::default(),
            obstacles: ObstacleKind::ALL.map(ObstacleTuning::builtin),
        }
    }
}

impl Tuning {
    /// Parameters for one obstacle kind
    #[inline]
    pub fn obstacle(&self, kind: ObstacleKind) -> &ObstacleTuning {
        &self.obstacles[kind.index()]
    }

    /// Parse and validate a JSON table
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON table from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TuningError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys only
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let ship = &self.ship;
        for (field, value) in [
            ("ship.x", ship.x),
            ("ship.acceleration", ship.acceleration),
            ("ship.deceleration", ship.deceleration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::OutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("ship.width", ship.width),
            ("ship.height", ship.height),
            ("projectile.speed", self.projectile.speed),
            ("projectile.radius", self.projectile.radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::OutOfRange { field, value });
            }
        }

        let mut prev: Option<&ObstacleTuning> = None;
        for (slot, (entry, expected)) in self.obstacles.iter().zip(ObstacleKind::ALL).enumerate() {
            if entry.kind != expected {
                return Err(TuningError::KindMismatch {
                    slot,
                    expected,
                    found: entry.kind,
                });
            }
            if !entry.spawn_period.is_finite() || entry.spawn_period <= 0.0 {
                return Err(TuningError::InvalidObstacle {
                    kind: entry.kind,
                    reason: "spawn_period must be positive",
                });
            }
            if entry.points <= 0 {
                return Err(TuningError::InvalidObstacle {
                    kind: entry.kind,
                    reason: "points must be positive",
                });
            }
            if !(entry.speed_min.is_finite() && entry.speed_max.is_finite())
                || entry.speed_min > entry.speed_max
                || entry.speed_max >= 0.0
            {
                return Err(TuningError::InvalidObstacle {
                    kind: entry.kind,
                    reason: "speed range must be ordered and strictly negative",
                });
            }
            if !(entry.scale_min.is_finite() && entry.scale_max.is_finite())
                || entry.scale_min > entry.scale_max
                || entry.scale_min <= 0.0
            {
                return Err(TuningError::InvalidObstacle {
                    kind: entry.kind,
                    reason: "scale range must be ordered and positive",
                });
            }
            if !entry.base_size.is_finite() || entry.base_size.min_element() <= 0.0 {
                return Err(TuningError::InvalidObstacle {
                    kind: entry.kind,
                    reason: "base_size must be positive",
                });
            }
            if let Some(prev) = prev {
                // Rarer spawns must be worth more
                if entry.points <= prev.points || entry.spawn_period <= prev.spawn_period {
                    return Err(TuningError::NotMonotonic {
                        lower: prev.kind,
                        higher: entry.kind,
                    });
                }
            }
            prev = Some(entry);
        }
        Ok(())
    }
}

/// Failure to load a tuning override
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    Io { path: String, message: String },
    Parse(String),
    OutOfRange { field: &'static str, value: f32 },
    KindMismatch { slot: usize, expected: ObstacleKind, found: ObstacleKind },
    InvalidObstacle { kind: ObstacleKind, reason: &'static str },
    NotMonotonic { lower: ObstacleKind, higher: ObstacleKind },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Parse(message) => write!(f, "malformed tuning JSON: {message}"),
            Self::OutOfRange { field, value } => write!(f, "{field} out of range: {value}"),
            Self::KindMismatch {
                slot,
                expected,
                found,
            } => write!(f, "obstacle slot {slot} holds {found:?}, expected {expected:?}"),
            Self::InvalidObstacle { kind, reason } => write!(f, "{kind:?}: {reason}"),
            Self::NotMonotonic { lower, higher } => write!(
                f,
                "{higher:?} must have more points and a longer spawn period than {lower:?}"
            ),
        }
    }
}

impl std::error::Error for TuningError {}
