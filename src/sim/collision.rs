//! Axis-separated collision resolution
//!
//! A moving body is pushed out of static platforms one axis at a time,
//! horizontal first, then vertical. Resolving both axes at once makes corner
//! hits ambiguous (which face did the body come through?); moving and
//! correcting a single axis at a time leaves only one possible answer.

use super::body::{Body, Platform};

/// Outcome of a vertical resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalResult {
    /// Body came down onto a platform top this pass
    pub landed: bool,
    /// Body rose into a platform underside this pass
    pub bumped_head: bool,
}

/// Outcome of a horizontal resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorizontalResult {
    /// Number of platforms the body was pushed out of
    pub contacts: u32,
}

/// Push a body out of every platform it overlaps along the x axis
///
/// The direction of travel is read from `body.vel.x`. Horizontal velocity is
/// left as-is; it is re-derived from input every frame.
pub fn resolve_horizontal(body: &mut Body, platforms: &[Platform]) -> HorizontalResult {
    let mut result = HorizontalResult::default();

    for platform in platforms {
        if !body.rect.intersects(&platform.rect) {
            continue;
        }
        if body.vel.x > 0.0 {
            body.rect.x = platform.rect.left() - body.rect.width;
            result.contacts += 1;
        } else if body.vel.x < 0.0 {
            body.rect.x = platform.rect.right();
            result.contacts += 1;
        }
    }

    result
}

/// Push a body out of every platform it overlaps along the y axis
///
/// Any correction zeroes `vel.y`. Downward corrections count as landing.
pub fn resolve_vertical(body: &mut Body, platforms: &[Platform]) -> VerticalResult {
    let mut result = VerticalResult::default();

    for platform in platforms {
        if !body.rect.intersects(&platform.rect) {
            continue;
        }
        if body.vel.y > 0.0 {
            body.rect.y = platform.rect.top() - body.rect.height;
            body.vel.y = 0.0;
            result.landed = true;
        } else if body.vel.y < 0.0 {
            body.rect.y = platform.rect.bottom();
            body.vel.y = 0.0;
            result.bumped_head = true;
        }
    }

    result
}

/// Apply `vel.x` to the position, then resolve along x
pub fn step_horizontal(body: &mut Body, platforms: &[Platform]) -> HorizontalResult {
    body.rect.x += body.vel.x;
    resolve_horizontal(body, platforms)
}

/// Apply `vel.y` to the position, then resolve along y
pub fn step_vertical(body: &mut Body, platforms: &[Platform]) -> VerticalResult {
    body.rect.y += body.vel.y;
    resolve_vertical(body, platforms)
}
