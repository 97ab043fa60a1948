//! Session state and frame events

use serde::{Deserialize, Serialize};

use super::level::RespawnCause;
use super::manager::LevelManager;
use crate::level::Campaign;
use crate::tuning::Tuning;

/// Campaign progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Playing the level at this index
    Playing(usize),
    /// Every level cleared; waits for a restart
    Victory,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Respawned { cause: RespawnCause },
    LevelStarted { index: usize, name: String },
    Victory,
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub manager: LevelManager,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Restart was held on the previous tick (restart fires on the press only)
    pub restart_held: bool,
}

impl GameState {
    pub fn new(campaign: Campaign, tuning: Tuning) -> Self {
        Self {
            manager: LevelManager::new(campaign, tuning),
            time_ticks: 0,
            restart_held: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.manager.phase()
    }
}
