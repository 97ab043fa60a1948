//! Campaign progression
//!
//! `Playing(i)` advances to `Playing(i + 1)` on each win until the last level,
//! where the manager enters `Victory` and stays there until `reset`.

use super::level::Level;
use super::player::Player;
use super::state::{GameEvent, GamePhase};
use super::tick::InputSnapshot;
use crate::level::Campaign;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct LevelManager {
    tuning: Tuning,
    campaign: Campaign,
    /// Lives for the whole session; levels only reposition it
    pub player: Player,
    pub level: Level,
    pub current_index: usize,
    /// Announcement countdown (frames); cosmetic only
    pub transition_timer: u32,
    pub victory: bool,
}

impl LevelManager {
    pub fn new(campaign: Campaign, tuning: Tuning) -> Self {
        let first = campaign.first();
        let mut player = Player::new(first.spawn.into(), &tuning);
        let level = Level::new(first, &tuning, &mut player);
        Self {
            transition_timer: tuning.transition_frames,
            tuning,
            campaign,
            player,
            level,
            current_index: 0,
            victory: false,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn level_count(&self) -> usize {
        self.campaign.len()
    }

    pub fn phase(&self) -> GamePhase {
        if self.victory {
            GamePhase::Victory
        } else {
            GamePhase::Playing(self.current_index)
        }
    }

    fn load_level(&mut self, index: usize) {
        let Some(desc) = self.campaign.get(index) else {
            log::warn!("No level at index {index}, keeping the current one");
            return;
        };
        self.current_index = index;
        self.level = Level::new(desc, &self.tuning, &mut self.player);
        self.transition_timer = self.tuning.transition_frames;
    }

    /// Advance one frame. A no-op once the campaign is won.
    pub fn update(&mut self, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
        if self.victory {
            return;
        }

        self.transition_timer = self.transition_timer.saturating_sub(1);

        let frame = self.level.update(&mut self.player, input, &self.tuning);
        if let Some(cause) = frame.respawn {
            events.push(GameEvent::Respawned { cause });
        }

        if frame.reached_goal {
            let next = self.current_index + 1;
            if next < self.level_count() {
                self.load_level(next);
                events.push(GameEvent::LevelStarted {
                    index: next,
                    name: self.level.name.clone(),
                });
            } else {
                log::info!("All {} levels cleared", self.level_count());
                self.victory = true;
                events.push(GameEvent::Victory);
            }
        }
    }

    /// Restart the campaign from the first level, from any state
    pub fn reset(&mut self) {
        self.victory = false;
        self.load_level(0);
    }
}
