//! Sky Runner - A side-scrolling multi-level platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, camera, progression)
//! - `level`: Level descriptors, validation and the built-in campaign
//! - `tuning`: Immutable physics/viewport configuration
//! - `renderer`: Snapshot to vertex adapter for a presentation layer

pub mod level;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use level::{Campaign, LevelDescriptor, LevelError};
pub use tuning::{Tuning, TuningError};

/// Default configuration constants (per-frame units at 60 Hz)
pub mod consts {
    /// Frames per second of the fixed simulation step
    pub const FPS: u32 = 60;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Vertical motion (pixels/frame, pixels/frame²)
    pub const GRAVITY: f32 = 0.8;
    pub const TERMINAL_VELOCITY: f32 = 20.0;
    /// Upward, so negative in screen space
    pub const JUMP_SPEED: f32 = -16.0;

    /// Horizontal run speed (pixels/frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_DEFAULT_SPEED: f32 = 2.0;

    /// How far below the viewport the player may fall before respawning
    pub const FALL_MARGIN: f32 = 200.0;

    /// Fraction of the remaining camera distance covered per frame
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    /// Announcement overlay duration (frames)
    pub const TRANSITION_FRAMES: u32 = 90;

    /// Generated ground strip
    pub const GROUND_HEIGHT: f32 = 40.0;
    pub const GROUND_PADDING: f32 = 400.0;

    /// Goal defaults when a descriptor omits them
    pub const GOAL_DEFAULT_WIDTH: f32 = 40.0;
    pub const GOAL_DEFAULT_HEIGHT: f32 = 160.0;
}
