//! Rendering adapter
//!
//! Turns a `FrameSnapshot` into colored triangles in viewport space. Uploading
//! and drawing them is up to the host; nothing here touches the simulation.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors, rgba};

use crate::sim::{FrameSnapshot, Rect};

const CIRCLE_SEGMENTS: u32 = 24;
/// Share of the viewport above the ground-fill band
const HORIZON: f32 = 0.75;
const BUSH_HEIGHT: f32 = 50.0;
const BUSH_DEFAULT_RISE: f32 = 110.0;
const POLE_WIDTH: f32 = 8.0;
const POLE_RISE: f32 = 140.0;
const START_MARKER: (f32, f32, f32) = (60.0, 8.0, 44.0);
const ANNOUNCE_ALPHA: f32 = 0.4;
const VICTORY_ALPHA: f32 = 200.0 / 255.0;

/// Build every vertex for one frame, back to front
pub fn build_frame(snap: &FrameSnapshot) -> Vec<Vertex> {
    let mut out = Vec::new();
    background(snap, &mut out);
    world(snap, &mut out);
    overlays(snap, &mut out);
    out
}

/// Sky, ground fill and parallax decorations
fn background(snap: &FrameSnapshot, out: &mut Vec<Vertex>) {
    let Vec2 { x: w, y: h } = snap.viewport;
    let horizon = h * HORIZON;
    let offset = snap.offset_x;
    let deco = &snap.decorations;

    out.extend(shapes::quad(
        &Rect::new(0.0, 0.0, w, horizon),
        rgba(snap.background_color, 1.0),
    ));
    out.extend(shapes::quad(
        &Rect::new(0.0, horizon, w, h - horizon),
        rgba(snap.ground_fill_color, 1.0),
    ));

    for hill in &deco.hills {
        let base_x = hill.x - offset * hill.parallax;
        out.extend(shapes::triangle(
            Vec2::new(base_x, h),
            Vec2::new(base_x + hill.width / 2.0, h - hill.height),
            Vec2::new(base_x + hill.width, h),
            rgba(hill.color, 1.0),
        ));
    }

    for cloud in &deco.clouds {
        let base = Vec2::new(cloud.x - offset * cloud.parallax, cloud.y);
        let radius = 20.0 * cloud.scale;
        for puff in [
            base,
            base + Vec2::new(radius, -radius / 2.0),
            base + Vec2::new(radius * 2.0, 0.0),
        ] {
            out.extend(shapes::circle(puff, radius, colors::CLOUD, CIRCLE_SEGMENTS));
        }
    }

    for bush in &deco.bushes {
        let y = bush.y.unwrap_or(h - BUSH_DEFAULT_RISE);
        let rect = Rect::new(bush.x - offset, y, bush.width, BUSH_HEIGHT);
        out.extend(shapes::ellipse(&rect, rgba(bush.color, 1.0), CIRCLE_SEGMENTS));
    }
}

/// Platforms, enemies, goal, player and the start marker, shifted by the camera
fn world(snap: &FrameSnapshot, out: &mut Vec<Vertex>) {
    let shift = -snap.offset_x;

    for platform in &snap.platforms {
        out.extend(shapes::quad(
            &platform.rect.translated_x(shift),
            rgba(platform.color, 1.0),
        ));
    }

    for enemy in &snap.enemies {
        out.extend(shapes::quad(&enemy.translated_x(shift), colors::ENEMY));
    }

    let goal = snap.goal.translated_x(shift);
    out.extend(shapes::quad(&goal, colors::GOAL));
    let pole = Rect::new(
        goal.right() - 6.0,
        goal.top() - POLE_RISE,
        POLE_WIDTH,
        goal.height + POLE_RISE,
    );
    out.extend(shapes::quad(&pole, colors::GOAL_POLE));
    out.extend(shapes::triangle(
        Vec2::new(goal.right() + 2.0, goal.top() - 120.0),
        Vec2::new(goal.right() + 2.0, goal.top() - 70.0),
        Vec2::new(goal.right() + 60.0, goal.top() - 95.0),
        colors::GOAL_FLAG,
    ));

    out.extend(shapes::quad(&snap.player.translated_x(shift), colors::PLAYER));

    let (marker_w, marker_h, marker_rise) = START_MARKER;
    let marker = Rect::new(
        snap.spawn.x + shift,
        snap.viewport.y - marker_rise,
        marker_w,
        marker_h,
    );
    out.extend(shapes::quad(&marker, colors::START_MARKER));
}

/// Level announcement fade and the victory screen
fn overlays(snap: &FrameSnapshot, out: &mut Vec<Vertex>) {
    let screen = Rect::new(0.0, 0.0, snap.viewport.x, snap.viewport.y);

    if let Some(alpha) = announcement_alpha(snap) {
        let mut color = colors::OVERLAY;
        color[3] = alpha;
        out.extend(shapes::quad(&screen, color));
    }

    if snap.victory {
        let mut color = colors::OVERLAY;
        color[3] = VICTORY_ALPHA;
        out.extend(shapes::quad(&screen, color));
    }
}

/// Overlay alpha while a level announcement is showing
pub fn announcement_alpha(snap: &FrameSnapshot) -> Option<f32> {
    (snap.transition_timer > 0).then(|| ANNOUNCE_ALPHA * snap.announcement_strength())
}
