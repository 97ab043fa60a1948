//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Rgb;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Viewport pixels, origin top-left
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Convert an authored RGB color to normalized RGBA
pub fn rgba(rgb: Rgb, alpha: f32) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha,
    ]
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0, 1.0]; // Steel blue
    pub const ENEMY: [f32; 4] = [200.0 / 255.0, 70.0 / 255.0, 70.0 / 255.0, 1.0];
    pub const GOAL: [f32; 4] = [245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0];
    pub const GOAL_POLE: [f32; 4] = [180.0 / 255.0, 180.0 / 255.0, 180.0 / 255.0, 1.0];
    pub const GOAL_FLAG: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const START_MARKER: [f32; 4] = [30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Black; alpha set per frame
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
