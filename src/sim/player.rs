//! The player-controlled body
//!
//! Grounded/airborne/running states are implicit in `on_ground` and the
//! velocity; there is no explicit state enum.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Platform, Rect};
use super::collision::{step_horizontal, step_vertical};
use super::tick::InputSnapshot;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Rested on a platform top during the last vertical resolution
    pub on_ground: bool,
    /// Where `reset` teleports the body to (top-left corner)
    pub spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(spawn, tuning.player_width, tuning.player_height),
            on_ground: false,
            spawn,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    /// Set horizontal velocity from input and start a jump if grounded
    pub fn handle_input(&mut self, input: &InputSnapshot, tuning: &Tuning) {
        self.body.vel.x = match (input.move_left, input.move_right) {
            (true, false) => -tuning.player_speed,
            (false, true) => tuning.player_speed,
            _ => 0.0,
        };

        if input.jump && self.on_ground {
            self.body.vel.y = tuning.jump_speed;
            self.on_ground = false;
        }
    }

    /// Gravity applies every frame, grounded or not; vertical resolution
    /// zeroes it again while standing
    pub fn apply_gravity(&mut self, tuning: &Tuning) {
        self.body.vel.y = (self.body.vel.y + tuning.gravity).min(tuning.terminal_velocity);
    }

    /// Advance one frame: input, gravity, horizontal move, vertical move
    pub fn update(&mut self, input: &InputSnapshot, platforms: &[Platform], tuning: &Tuning) {
        self.handle_input(input, tuning);
        self.apply_gravity(tuning);

        step_horizontal(&mut self.body, platforms);

        self.on_ground = false;
        let vertical = step_vertical(&mut self.body, platforms);
        self.on_ground = vertical.landed;
    }

    /// Return to the spawn point at rest
    pub fn reset(&mut self) {
        self.body.rect.set_top_left(self.spawn);
        self.body.vel = Vec2::ZERO;
    }

    /// Move the spawn point and snap the body to it
    pub fn set_spawn(&mut self, spawn: Vec2) {
        self.spawn = spawn;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Platform {
        Platform::new(Rect::new(0.0, 560.0, 2400.0, 40.0), [124, 92, 60])
    }

    fn right() -> InputSnapshot {
        InputSnapshot {
            move_right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_gravity_after_one_frame() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(80.0, 100.0), &tuning);
        player.update(&InputSnapshot::default(), &[floor()], &tuning);
        assert_eq!(player.body.vel.y, tuning.gravity);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_terminal_velocity() {
        let tuning = Tuning::default();
        // Nothing to land on
        let mut player = Player::new(Vec2::new(80.0, 0.0), &tuning);
        for _ in 0..100 {
            player.update(&InputSnapshot::default(), &[], &tuning);
            assert!(player.body.vel.y <= tuning.terminal_velocity);
        }
        assert_eq!(player.body.vel.y, tuning.terminal_velocity);
    }

    #[test]
    fn test_lands_and_stays_grounded() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(80.0, 380.0), &tuning);
        for _ in 0..60 {
            player.update(&InputSnapshot::default(), &[floor()], &tuning);
        }
        assert!(player.on_ground);
        assert_eq!(player.body.vel.y, 0.0);
        assert_eq!(player.rect().bottom(), 560.0);

        // Standing still keeps re-landing every frame
        player.update(&InputSnapshot::default(), &[floor()], &tuning);
        assert!(player.on_ground);
        assert_eq!(player.rect().bottom(), 560.0);
    }

    #[test]
    fn test_opposing_inputs_cancel() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(80.0, 500.0), &tuning);
        let both = InputSnapshot {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        player.update(&both, &[floor()], &tuning);
        assert_eq!(player.body.vel.x, 0.0);
        assert_eq!(player.rect().x, 80.0);

        player.update(&right(), &[floor()], &tuning);
        assert_eq!(player.body.vel.x, tuning.player_speed);
        assert_eq!(player.rect().x, 85.0);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let tuning = Tuning::default();
        let jump = InputSnapshot {
            jump: true,
            ..Default::default()
        };

        // Airborne: jump ignored
        let mut player = Player::new(Vec2::new(80.0, 100.0), &tuning);
        player.update(&jump, &[floor()], &tuning);
        assert_eq!(player.body.vel.y, tuning.gravity);

        // Grounded: jump applied, then gravity on the same frame
        let mut player = Player::new(Vec2::new(80.0, 500.0), &tuning);
        player.update(&InputSnapshot::default(), &[floor()], &tuning);
        assert!(player.on_ground);
        player.update(&jump, &[floor()], &tuning);
        assert_eq!(player.body.vel.y, tuning.jump_speed + tuning.gravity);
        assert!(!player.on_ground);
        assert!(player.rect().bottom() < 560.0);
    }

    #[test]
    fn test_reset_and_set_spawn() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(80.0, 380.0), &tuning);
        for _ in 0..30 {
            player.update(&right(), &[floor()], &tuning);
        }
        player.reset();
        assert_eq!(player.rect().top_left(), Vec2::new(80.0, 380.0));
        assert_eq!(player.body.vel, Vec2::ZERO);

        player.set_spawn(Vec2::new(60.0, 340.0));
        assert_eq!(player.spawn, Vec2::new(60.0, 340.0));
        assert_eq!(player.rect().top_left(), Vec2::new(60.0, 340.0));
    }
}
