//! World-space primitives: vectors, axis-aligned boxes and swept motion.
//!
//! Coordinates follow screen convention: x grows to the right, y grows
//! downward, so "up" means a smaller y.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// 2D vector in world pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned box. Edges are inclusive for containment, exclusive for overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box of the given size centred on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let hw = size.x / 2.0;
        let hh = size.y / 2.0;
        Self::new(center.x - hw, center.y - hh, center.x + hw, center.y + hh)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True when the interiors overlap. Boxes that merely touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    pub fn translated(&self, by: Vec2) -> Rect {
        Rect::new(
            self.left + by.x,
            self.top + by.y,
            self.right + by.x,
            self.bottom + by.y,
        )
    }

    fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top < other.bottom && self.bottom > other.top
    }

    fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left < other.right && self.right > other.left
    }
}

/// Outcome of [`move_and_slide`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideResult {
    /// Displacement actually applied after blocking.
    pub applied: Vec2,
    /// Number of contacts encountered (0 = free motion).
    pub contacts: u32,
}

impl SlideResult {
    pub fn collided(&self) -> bool {
        self.contacts > 0
    }
}

/// Sweep `body` by `motion` against static `solids`, one axis at a time.
///
/// Motion along an axis stops flush against the first solid in its path and
/// the remaining axis keeps sliding. A body that already overlaps a solid
/// reports a contact without being pushed out.
pub fn move_and_slide(body: Rect, motion: Vec2, solids: &[Rect]) -> SlideResult {
    let mut contacts = 0;

    for solid in solids {
        if body.intersects(solid) {
            contacts += 1;
        }
    }

    let (dx, hits_x) = sweep_x(&body, motion.x, solids);
    contacts += hits_x;
    let moved = body.translated(Vec2::new(dx, 0.0));

    let (dy, hits_y) = sweep_y(&moved, motion.y, solids);
    contacts += hits_y;

    SlideResult {
        applied: Vec2::new(dx, dy),
        contacts,
    }
}

fn sweep_x(body: &Rect, dx: f32, solids: &[Rect]) -> (f32, u32) {
    let mut allowed = dx;
    let mut hits = 0;
    for solid in solids.iter().filter(|s| body.overlaps_vertically(s)) {
        if dx > 0.0 && body.right <= solid.left && body.right + dx > solid.left {
            allowed = allowed.min(solid.left - body.right);
            hits += 1;
        } else if dx < 0.0 && body.left >= solid.right && body.left + dx < solid.right {
            allowed = allowed.max(solid.right - body.left);
            hits += 1;
        }
    }
    (allowed, hits)
}

fn sweep_y(body: &Rect, dy: f32, solids: &[Rect]) -> (f32, u32) {
    let mut allowed = dy;
    let mut hits = 0;
    for solid in solids.iter().filter(|s| body.overlaps_horizontally(s)) {
        if dy > 0.0 && body.bottom <= solid.top && body.bottom + dy > solid.top {
            allowed = allowed.min(solid.top - body.bottom);
            hits += 1;
        } else if dy < 0.0 && body.top >= solid.bottom && body.top + dy < solid.bottom {
            allowed = allowed.max(solid.bottom - body.top);
            hits += 1;
        }
    }
    (allowed, hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32, y: f32) -> Rect {
        Rect::from_center(Vec2::new(x, y), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9.0, 9.0, 11.0, 11.0)));
    }

    #[test]
    fn test_free_motion_applies_full_displacement() {
        let result = move_and_slide(unit_box_at(0.0, 0.0), Vec2::new(5.0, -3.0), &[]);
        assert_eq!(result.applied, Vec2::new(5.0, -3.0));
        assert!(!result.collided());
    }

    #[test]
    fn test_blocked_horizontally_stops_flush() {
        let wall = Rect::new(10.0, -100.0, 30.0, 100.0);
        // Body right edge at 5, wall at 10, trying to move 20
        let result = move_and_slide(unit_box_at(0.0, 0.0), Vec2::new(20.0, 2.0), &[wall]);
        assert!((result.applied.x - 5.0).abs() < 1e-5);
        // Vertical component still slides
        assert!((result.applied.y - 2.0).abs() < 1e-5);
        assert!(result.collided());
    }

    #[test]
    fn test_blocked_vertically_from_above() {
        let floor = Rect::new(-100.0, 20.0, 100.0, 40.0);
        let result = move_and_slide(unit_box_at(0.0, 0.0), Vec2::new(0.0, 50.0), &[floor]);
        assert!((result.applied.y - 15.0).abs() < 1e-5);
        assert_eq!(result.contacts, 1);
    }

    #[test]
    fn test_fast_motion_does_not_tunnel() {
        let thin = Rect::new(20.0, -50.0, 21.0, 50.0);
        let result = move_and_slide(unit_box_at(0.0, 0.0), Vec2::new(500.0, 0.0), &[thin]);
        assert!(result.collided());
        assert!(result.applied.x <= 15.0 + 1e-5);
    }

    #[test]
    fn test_existing_overlap_counts_as_contact() {
        let solid = Rect::new(-1.0, -1.0, 1.0, 1.0);
        let result = move_and_slide(unit_box_at(0.0, 0.0), Vec2::ZERO, &[solid]);
        assert!(result.collided());
    }

    #[test]
    fn test_solid_out_of_lane_is_ignored() {
        let above = Rect::new(10.0, -100.0, 30.0, -20.0);
        let result = move_and_slide(unit_box_at(0.0, 0.0), Vec2::new(40.0, 0.0), &[above]);
        assert!(!result.collided());
        assert_eq!(result.applied.x, 40.0);
    }
}
