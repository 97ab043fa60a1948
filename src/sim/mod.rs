//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no sub-stepping
//! - Stable iteration order (platform and enemy list order)
//! - Tuning passed in, never read from globals
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod manager;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{Body, Platform, Rect, Rgb};
pub use collision::{HorizontalResult, VerticalResult, resolve_horizontal, resolve_vertical};
pub use enemy::Enemy;
pub use level::{Level, LevelFrame, RespawnCause};
pub use manager::LevelManager;
pub use player::Player;
pub use snapshot::FrameSnapshot;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{InputSnapshot, tick};
