//! Patrolling hazards
//!
//! Enemies walk back and forth inside `[min_x, max_x]`. No gravity acts on
//! them; level data places them on top of a platform.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Rect};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub min_x: f32,
    pub max_x: f32,
    /// Signed horizontal speed (pixels/frame); sign is the direction
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, size: f32, patrol: (f32, f32), speed: f32) -> Self {
        let mut body = Body::new(pos, size, size);
        body.vel.x = speed;
        Self {
            body,
            min_x: patrol.0,
            max_x: patrol.1,
            speed,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    /// Step once; on reaching a boundary, reverse and step back in the same
    /// frame so the body never shows past the band
    pub fn update(&mut self) {
        self.body.rect.x += self.speed;

        let rect = &self.body.rect;
        let hit_boundary = if self.speed < 0.0 {
            rect.left() <= self.min_x
        } else {
            rect.right() >= self.max_x
        };

        if hit_boundary {
            self.speed = -self.speed;
            self.body.rect.x += self.speed;
        }
        self.body.vel.x = self.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patroller(x: f32, speed: f32) -> Enemy {
        Enemy::new(Vec2::new(x, 290.0), 40.0, (0.0, 100.0), speed)
    }

    #[test]
    fn test_reversal_at_right_boundary() {
        // right edge at 98, next step reaches 100
        let mut enemy = patroller(58.0, 2.0);
        enemy.update();
        assert_eq!(enemy.speed, -2.0);
        assert_eq!(enemy.rect().x, 58.0);
        assert!(enemy.rect().right() <= enemy.max_x);
    }

    #[test]
    fn test_reversal_at_left_boundary() {
        let mut enemy = patroller(2.0, -2.0);
        enemy.update();
        assert_eq!(enemy.speed, 2.0);
        assert_eq!(enemy.rect().x, 2.0);
    }

    #[test]
    fn test_stays_inside_band() {
        let mut enemy = Enemy::new(Vec2::new(1240.0, 290.0), 40.0, (1220.0, 1500.0), 2.5);
        for _ in 0..1000 {
            enemy.update();
            assert!(enemy.rect().left() >= enemy.min_x);
            assert!(enemy.rect().right() <= enemy.max_x);
        }
    }

    #[test]
    fn test_patrol_is_periodic() {
        let (min_x, max_x, speed) = (0.0, 100.0, 2.0);
        let mut enemy = Enemy::new(Vec2::new(min_x, 0.0), 40.0, (min_x, max_x), speed);
        let bound = (2.0 * (max_x - min_x) / speed) as usize;

        let mut flips = 0;
        let mut returned_at = None;
        for step in 1..=bound {
            let before = enemy.speed;
            enemy.update();
            if enemy.speed.signum() != before.signum() {
                flips += 1;
            }
            if flips > 0 && enemy.speed > 0.0 && enemy.rect().left() <= min_x + speed {
                returned_at = Some(step);
                break;
            }
        }

        assert!(returned_at.is_some(), "enemy never came back to min_x");
        assert_eq!(flips % 2, 0);
        assert_eq!(enemy.speed, speed);
    }
}
