//! Read-only per-frame view for presentation
//!
//! A snapshot is an owned copy taken between ticks, so a renderer never sees
//! a half-updated world.

use glam::Vec2;
use serde::Serialize;

use super::body::{Platform, Rect, Rgb};
use super::state::GameState;
use crate::level::Decorations;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub level_name: String,
    pub level_index: usize,
    pub level_count: usize,
    pub player: Rect,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Rect>,
    pub goal: Rect,
    pub spawn: Vec2,
    pub offset_x: f32,
    pub transition_timer: u32,
    pub transition_frames: u32,
    pub victory: bool,
    pub background_color: Rgb,
    pub ground_fill_color: Rgb,
    pub decorations: Decorations,
    pub viewport: Vec2,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let manager = &state.manager;
        let level = &manager.level;
        let tuning = manager.tuning();
        Self {
            level_name: level.name.clone(),
            level_index: manager.current_index,
            level_count: manager.level_count(),
            player: *manager.player.rect(),
            platforms: level.platforms.clone(),
            enemies: level.enemies.iter().map(|e| *e.rect()).collect(),
            goal: level.goal,
            spawn: level.spawn,
            offset_x: level.offset_x,
            transition_timer: manager.transition_timer,
            transition_frames: tuning.transition_frames,
            victory: manager.victory,
            background_color: level.background_color,
            ground_fill_color: level.ground_fill_color,
            decorations: level.decorations.clone(),
            viewport: Vec2::new(tuning.viewport_width, tuning.viewport_height),
        }
    }

    /// Announcement strength in `[0, 1]`, 1 right after a level starts
    pub fn announcement_strength(&self) -> f32 {
        if self.transition_frames == 0 {
            return 0.0;
        }
        (self.transition_timer as f32 / self.transition_frames as f32).clamp(0.0, 1.0)
    }
}
