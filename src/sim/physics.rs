//! Per-frame motion
//!
//! Ship: semi-implicit Euler against thrust, hard clamp to the viewport with
//! the velocity killed on contact (no bounce).
//! Projectiles and obstacles: straight horizontal motion, deactivated once
//! they are fully off screen. An obstacle that leaves on the left while still
//! live costs the player its point value.

use super::pool::{Pool, Slot};
use super::state::{GameEvent, Obstacle, Projectile, Ship};

impl Ship {
    /// Integrate one frame of vertical motion
    pub fn fly(&mut self, thrust: bool, dt: f32, viewport_height: f32) {
        if thrust {
            self.vel_y -= self.acceleration * dt;
        } else {
            self.vel_y += self.deceleration * dt;
        }

        self.pos.y += self.vel_y * dt;

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = 0.0;
        } else if self.pos.y + self.size.y > viewport_height {
            self.pos.y = (viewport_height - self.size.y).max(0.0);
            self.vel_y = 0.0;
        }
    }
}

/// Move projectiles right; retire those past the right edge
pub fn advance_projectiles(projectiles: &mut Pool<Projectile>, dt: f32, viewport_width: f32) {
    for projectile in projectiles.iter_active_mut() {
        projectile.pos += projectile.vel * dt;
        if projectile.pos.x > viewport_width {
            projectile.deactivate();
        }
    }
}

/// Move obstacles left; retire those past the left edge and charge the
/// escape penalty. Returns how many escaped.
pub fn advance_obstacles(
    obstacles: &mut Pool<Obstacle>,
    dt: f32,
    score: &mut i64,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut escaped = 0;
    for obstacle in obstacles.iter_active_mut() {
        obstacle.pos += obstacle.vel * dt;
        if obstacle.pos.x + obstacle.size.x < 0.0 {
            obstacle.deactivate();
            *score -= obstacle.points;
            escaped += 1;
            log::debug!(
                "{} #{} escaped (-{})",
                obstacle.kind.as_str(),
                obstacle.id,
                obstacle.points
            );
            events.push(GameEvent::ObstacleEscaped {
                id: obstacle.id,
                kind: obstacle.kind,
                penalty: obstacle.points,
            });
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;
    use crate::consts::FRAME_DT;
    use crate::sim::state::ObstacleKind;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn ship_at(y: f32) -> Ship {
        let mut ship = Ship::new(&Tuning::default().ship, Viewport::default());
        ship.pos.y = y;
        ship
    }

    fn obstacle(x: f32, vx: f32, points: i64) -> Obstacle {
        Obstacle {
            id: 1,
            kind: ObstacleKind::Raider,
            pos: Vec2::new(x, 100.0),
            vel: Vec2::new(vx, 0.0),
            scale: 1.0,
            size: Vec2::splat(50.0),
            points,
            active: true,
        }
    }

    #[test]
    fn test_thrust_for_one_second() {
        let mut ship = ship_at(1000.0);
        for _ in 0..60 {
            ship.fly(true, FRAME_DT, 4000.0);
        }
        assert!((ship.vel_y + 1500.0).abs() < 0.5);
        // Semi-implicit Euler: sum of -25 * i * dt for i in 1..=60 = -762.5
        assert!((ship.pos.y - (1000.0 - 762.5)).abs() < 0.5);
    }

    #[test]
    fn test_thrust_clamps_at_top() {
        let mut ship = ship_at(300.0);
        for _ in 0..60 {
            ship.fly(true, FRAME_DT, 720.0);
        }
        assert_eq!(ship.pos.y, 0.0);
        assert_eq!(ship.vel_y, 0.0);
    }

    #[test]
    fn test_falls_without_thrust() {
        let mut ship = ship_at(300.0);
        ship.fly(false, FRAME_DT, 720.0);
        assert!(ship.vel_y > 0.0);
        assert!(ship.pos.y > 300.0);
    }

    #[test]
    fn test_clamps_at_bottom() {
        let mut ship = ship_at(600.0);
        for _ in 0..120 {
            ship.fly(false, FRAME_DT, 720.0);
        }
        assert_eq!(ship.pos.y, 720.0 - ship.size.y);
        assert_eq!(ship.vel_y, 0.0);
    }

    #[test]
    fn test_projectile_leaves_right_edge() {
        let registry = crate::sim::PrototypeRegistry::new(&Tuning::default());
        let mut pool = Pool::new();
        pool.admit(registry.clone_projectile(1, Vec2::new(1270.0, 50.0)));

        advance_projectiles(&mut pool, FRAME_DT, 1280.0);
        assert_eq!(pool.len(), 1);
        assert!(pool.get(0).unwrap().pos.x > 1270.0);

        advance_projectiles(&mut pool, FRAME_DT, 1280.0);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_obstacle_escape_penalty() {
        let mut pool = Pool::new();
        pool.admit(obstacle(1280.0 + 50.0, -150.0, 3));
        let mut score = 0;
        let mut events = Vec::new();
        let mut escaped = 0;

        for _ in 0..(60 * 20) {
            escaped += advance_obstacles(&mut pool, FRAME_DT, &mut score, &mut events);
            if pool.is_empty() {
                break;
            }
        }

        assert_eq!(escaped, 1);
        assert_eq!(score, -3);
        let o = pool.get(0).unwrap();
        assert!(!o.active);
        assert!(o.pos.x + o.size.x < 0.0);
        assert_eq!(
            events,
            vec![GameEvent::ObstacleEscaped {
                id: 1,
                kind: ObstacleKind::Raider,
                penalty: 3
            }]
        );
    }

    #[test]
    fn test_obstacle_partly_visible_stays_live() {
        let mut pool = Pool::new();
        pool.admit(obstacle(-40.0, -100.0, 2));
        let mut score = 0;
        let mut events = Vec::new();
        advance_obstacles(&mut pool, 0.01, &mut score, &mut events);
        assert_eq!(pool.len(), 1);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_inactive_entities_do_not_move() {
        let mut pool = Pool::new();
        let mut o = obstacle(-100.0, -100.0, 4);
        o.active = false;
        pool.admit(o);
        let mut score = 0;
        let mut events = Vec::new();
        advance_obstacles(&mut pool, 1.0, &mut score, &mut events);
        assert_eq!(pool.get(0).unwrap().pos.x, -100.0);
        assert_eq!(score, 0);
        assert!(events.is_empty());
    }
}
