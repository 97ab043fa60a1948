//! A playable level built from a descriptor
//!
//! Owns the static geometry, the hazards, the goal and the camera. The
//! session's player is borrowed for each update rather than owned, since it
//! outlives every level.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Platform, Rect, Rgb};
use super::enemy::Enemy;
use super::player::Player;
use super::tick::InputSnapshot;
use crate::level::{Decorations, LevelDescriptor};
use crate::tuning::Tuning;

pub const DEFAULT_BACKGROUND: Rgb = [135, 206, 235];
pub const DEFAULT_GROUND_FILL: Rgb = [120, 180, 110];
pub const DEFAULT_PLATFORM_COLOR: Rgb = [120, 120, 120];

/// Why the player was sent back to the spawn point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnCause {
    /// Touched an enemy
    Hazard,
    /// Dropped below the viewport
    FellOut,
}

/// What happened during one level frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelFrame {
    pub respawn: Option<RespawnCause>,
    pub reached_goal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub world_left: f32,
    pub world_right: f32,
    pub spawn: Vec2,
    pub goal: Rect,
    /// Generated ground strip first, then authored platforms in order
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    /// Camera: world x shown at the viewport's left edge
    pub offset_x: f32,
    pub background_color: Rgb,
    pub ground_fill_color: Rgb,
    pub decorations: Decorations,
}

impl Level {
    /// Build the runtime level and move the player onto its spawn point
    pub fn new(desc: &LevelDescriptor, tuning: &Tuning, player: &mut Player) -> Self {
        let (world_left, world_right) = desc.world_bounds();
        let spawn = Vec2::from(desc.spawn);
        player.set_spawn(spawn);

        let goal = Rect::new(
            desc.goal.x,
            desc.goal.y,
            desc.goal.width.unwrap_or(tuning.goal_default_width),
            desc.goal.height.unwrap_or(tuning.goal_default_height),
        );

        let ground = Rect::new(
            world_left - tuning.ground_padding,
            tuning.viewport_height - tuning.ground_height,
            (world_right - world_left) + 2.0 * tuning.ground_padding,
            tuning.ground_height,
        );
        let mut platforms = Vec::with_capacity(desc.platforms.len() + 1);
        platforms.push(Platform::new(ground, desc.ground_color));
        platforms.extend(desc.platforms.iter().map(|p| {
            Platform::new(
                Rect::from_array(p.rect),
                p.color.unwrap_or(DEFAULT_PLATFORM_COLOR),
            )
        }));

        let enemies = desc
            .enemies
            .iter()
            .map(|e| {
                Enemy::new(
                    Vec2::from(e.position),
                    tuning.enemy_size,
                    (e.patrol[0], e.patrol[1]),
                    e.speed.unwrap_or(tuning.enemy_default_speed),
                )
            })
            .collect();

        let mut level = Self {
            name: desc.name.clone(),
            world_left,
            world_right,
            spawn,
            goal,
            platforms,
            enemies,
            offset_x: 0.0,
            background_color: desc.background_color.unwrap_or(DEFAULT_BACKGROUND),
            ground_fill_color: desc.decorations.ground_fill.unwrap_or(DEFAULT_GROUND_FILL),
            decorations: desc.decorations.clone(),
        };
        // No pan-in on load
        level.offset_x = level.camera_target(player, tuning);

        log::info!(
            "Loaded level '{}': {} platforms, {} enemies, bounds [{}, {}]",
            level.name,
            level.platforms.len(),
            level.enemies.len(),
            world_left,
            world_right
        );
        level
    }

    /// Advance one frame. Order matters: player, enemies, hazards, fall,
    /// camera, goal.
    pub fn update(
        &mut self,
        player: &mut Player,
        input: &InputSnapshot,
        tuning: &Tuning,
    ) -> LevelFrame {
        let mut frame = LevelFrame::default();

        player.update(input, &self.platforms, tuning);

        for enemy in &mut self.enemies {
            enemy.update();
        }

        if self.touches_hazard(player) {
            log::debug!("Player hit a hazard in '{}', respawning", self.name);
            player.reset();
            frame.respawn = Some(RespawnCause::Hazard);
        }

        if player.rect().top() > tuning.viewport_height + tuning.fall_margin {
            log::debug!("Player fell out of '{}', respawning", self.name);
            player.reset();
            frame.respawn = Some(RespawnCause::FellOut);
        }

        self.update_camera(player, tuning);

        frame.reached_goal = self.check_win(player);
        frame
    }

    pub fn touches_hazard(&self, player: &Player) -> bool {
        self.enemies
            .iter()
            .any(|enemy| enemy.rect().intersects(player.rect()))
    }

    pub fn check_win(&self, player: &Player) -> bool {
        player.rect().intersects(&self.goal)
    }

    /// Camera position that centers the player, clamped to the world bounds
    pub fn camera_target(&self, player: &Player, tuning: &Tuning) -> f32 {
        let min_offset = self.world_left;
        let max_offset = (self.world_right - tuning.viewport_width).max(min_offset);
        (player.rect().center_x() - tuning.viewport_width / 2.0).clamp(min_offset, max_offset)
    }

    /// Exponential smoothing toward the target
    pub fn update_camera(&mut self, player: &Player, tuning: &Tuning) {
        let target = self.camera_target(player, tuning);
        self.offset_x += (target - self.offset_x) * tuning.camera_smoothing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{EnemyDescriptor, GoalDescriptor, PlatformDescriptor};
    use proptest::prelude::*;

    fn walk_level() -> LevelDescriptor {
        LevelDescriptor {
            name: "Walk".to_string(),
            width: 2400.0,
            bounds: Some([0.0, 2400.0]),
            spawn: [80.0, 380.0],
            goal: GoalDescriptor {
                x: 2200.0,
                y: 400.0,
                width: Some(40.0),
                height: Some(170.0),
            },
            ground_color: [124, 92, 60],
            background_color: None,
            platforms: vec![PlatformDescriptor {
                rect: [0.0, 560.0, 2400.0, 40.0],
                color: None,
            }],
            enemies: Vec::new(),
            decorations: Decorations::default(),
        }
    }

    fn right() -> InputSnapshot {
        InputSnapshot {
            move_right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_construction() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let level = Level::new(&walk_level(), &tuning, &mut player);

        assert_eq!(player.spawn, Vec2::new(80.0, 380.0));
        assert_eq!(player.rect().top_left(), Vec2::new(80.0, 380.0));
        assert_eq!(level.platforms.len(), 2);
        assert_eq!(level.platforms[0].rect, Rect::new(-400.0, 560.0, 3200.0, 40.0));
        assert_eq!(level.platforms[1].color, DEFAULT_PLATFORM_COLOR);
        assert_eq!(level.goal, Rect::new(2200.0, 400.0, 40.0, 170.0));
        assert_eq!(level.background_color, DEFAULT_BACKGROUND);
        // Spawn near the left edge clamps the camera to the world's left bound
        assert_eq!(level.offset_x, 0.0);
    }

    #[test]
    fn test_walk_to_goal_wins_exactly_once() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut level = Level::new(&walk_level(), &tuning, &mut player);

        let mut wins = 0;
        let mut frames = 0;
        while player.rect().center_x() < 2200.0 {
            let was_overlapping = player.rect().intersects(&level.goal);
            let frame = level.update(&mut player, &right(), &tuning);
            frames += 1;
            assert!(frame.respawn.is_none());
            if frame.reached_goal {
                assert!(!was_overlapping);
                assert!(player.rect().intersects(&level.goal));
                wins += 1;
                break;
            }
            assert!(frames < 1000, "never reached the goal");
        }

        assert_eq!(wins, 1);
        // Right edge touching the goal's left edge (x = 2160) is not a win yet
        assert_eq!(player.rect().x, 2165.0);
    }

    #[test]
    fn test_hazard_respawns_player() {
        let tuning = Tuning::default();
        let mut desc = walk_level();
        desc.enemies.push(EnemyDescriptor {
            position: [130.0, 520.0],
            patrol: [100.0, 400.0],
            speed: Some(-2.0),
        });
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut level = Level::new(&desc, &tuning, &mut player);

        let mut respawned = None;
        for _ in 0..200 {
            let frame = level.update(&mut player, &InputSnapshot::default(), &tuning);
            if frame.respawn.is_some() {
                respawned = frame.respawn;
                break;
            }
        }
        assert_eq!(respawned, Some(RespawnCause::Hazard));
        assert_eq!(player.rect().top_left(), player.spawn);
        assert_eq!(player.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_hazard_at_spawn_respawns_every_frame() {
        let tuning = Tuning::default();
        let mut desc = walk_level();
        // Slow enemy overlapping the spawn rect for many frames
        desc.enemies.push(EnemyDescriptor {
            position: [60.0, 400.0],
            patrol: [0.0, 2000.0],
            speed: Some(0.5),
        });
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut level = Level::new(&desc, &tuning, &mut player);

        for _ in 0..5 {
            let frame = level.update(&mut player, &right(), &tuning);
            assert_eq!(frame.respawn, Some(RespawnCause::Hazard));
            assert_eq!(player.rect().top_left(), Vec2::new(80.0, 380.0));
        }
    }

    #[test]
    fn test_fall_out_respawns_player() {
        let tuning = Tuning::default();
        let mut desc = walk_level();
        desc.platforms.clear();
        // Spawn beyond the generated ground strip
        desc.spawn = [3500.0, 300.0];
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut level = Level::new(&desc, &tuning, &mut player);

        let mut cause = None;
        for _ in 0..200 {
            if let Some(c) = level.update(&mut player, &InputSnapshot::default(), &tuning).respawn {
                cause = Some(c);
                break;
            }
        }
        assert_eq!(cause, Some(RespawnCause::FellOut));
        assert_eq!(player.rect().top_left(), Vec2::new(3500.0, 300.0));
    }

    #[test]
    fn test_camera_collapses_in_narrow_level() {
        let tuning = Tuning::default();
        let mut desc = walk_level();
        desc.bounds = Some([-50.0, 500.0]);
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut level = Level::new(&desc, &tuning, &mut player);
        for _ in 0..60 {
            level.update(&mut player, &right(), &tuning);
            assert_eq!(level.offset_x, -50.0);
        }
    }

    #[test]
    fn test_camera_load_matches_spawn() {
        let tuning = Tuning::default();
        let mut desc = walk_level();
        desc.spawn = [1500.0, 380.0];
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let level = Level::new(&desc, &tuning, &mut player);
        // center 1520 minus half the viewport
        assert_eq!(level.offset_x, 1120.0);
    }

    proptest! {
        #[test]
        fn prop_camera_converges_monotonically(
            spawn_x in 0.0f32..2300.0,
            start_offset in 0.0f32..1600.0,
        ) {
            let tuning = Tuning::default();
            let mut desc = walk_level();
            desc.spawn = [spawn_x, 500.0];
            let mut player = Player::new(Vec2::ZERO, &tuning);
            let mut level = Level::new(&desc, &tuning, &mut player);
            level.offset_x = start_offset;

            let target = level.camera_target(&player, &tuning);
            let mut distance = (target - level.offset_x).abs();
            let mut frames = 0;
            while distance >= 1.0 {
                level.update_camera(&player, &tuning);
                let next = (target - level.offset_x).abs();
                prop_assert!(next <= distance);
                distance = next;
                frames += 1;
                // 0.9^n * 1600 < 1 well before 100 frames
                prop_assert!(frames <= 100);
            }
        }
    }
}
