//! Axis-aligned rectangle geometry shared by every entity
//!
//! Screen convention: `x` grows right, `y` grows down. A body's top edge is
//! `y`, its bottom edge `y + height`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGB color as authored in level data
pub type Rgb = [u8; 3];

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from the `[x, y, w, h]` form used by level descriptors
    pub fn from_array([x, y, width, height]: [f32; 4]) -> Self {
        Self::new(x, y, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_top_left(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// The same rectangle shifted horizontally by `dx`
    pub fn translated_x(&self, dx: f32) -> Rect {
        Rect {
            x: self.x + dx,
            ..*self
        }
    }
}

/// A rectangle that moves: position plus velocity (pixels/frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, width, height),
            vel: Vec2::ZERO,
        }
    }
}

/// Static level geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub color: Rgb,
}

impl Platform {
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self { rect, color }
    }
}
