//! Ground: two leapfrogging segments and the contact check that ends a run.

use crate::config::FloorConfig;
use crate::geometry::Rect;

#[derive(Debug, Clone)]
pub struct Floor {
    config: FloorConfig,
    /// World x of each segment's left edge.
    segments: [f32; 2],
    scrolling: bool,
}

impl Floor {
    pub fn new(config: &FloorConfig) -> Self {
        Self {
            config: config.clone(),
            segments: [0.0, config.width],
            scrolling: false,
        }
    }

    pub fn start_scrolling(&mut self) {
        self.scrolling = true;
    }

    pub fn stop_scrolling(&mut self) {
        self.scrolling = false;
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Move any segment that is fully behind the bird to the front.
    pub fn tick(&mut self, bird_x: f32) {
        if !self.scrolling {
            return;
        }
        let width = self.config.width;
        for i in 0..self.segments.len() {
            if self.segments[i] + width < bird_x - self.config.despawn_offset {
                let rightmost = self.segments[0].max(self.segments[1]);
                self.segments[i] = rightmost + width;
            }
        }
    }

    pub fn reset(&mut self) {
        self.scrolling = false;
        self.segments = [0.0, self.config.width];
    }

    pub fn ground_y(&self) -> f32 {
        self.config.ground_y
    }

    pub fn segment_rects(&self) -> [Rect; 2] {
        self.segments.map(|x| {
            Rect::new(
                x,
                self.config.ground_y,
                x + self.config.width,
                self.config.ground_y + self.config.height,
            )
        })
    }

    /// True when `body` reaches the ground over one of the segments.
    /// Anything below the surface counts, however deep.
    pub fn touches(&self, body: &Rect) -> bool {
        if body.bottom <= self.config.ground_y {
            return false;
        }
        self.segment_rects()
            .iter()
            .any(|seg| body.left < seg.right && body.right > seg.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    fn floor() -> Floor {
        Floor::new(&FloorConfig::default())
    }

    #[test]
    fn test_segments_start_side_by_side() {
        let floor = floor();
        let [a, b] = floor.segment_rects();
        assert_eq!(a.left, 0.0);
        assert_eq!(b.left, a.right);
    }

    #[test]
    fn test_segment_leapfrogs_when_far_behind() {
        let mut floor = floor();
        let width = FloorConfig::default().width;
        floor.start_scrolling();

        // Segment 0 ends at `width`; recycled once bird_x - 500 passes it
        floor.tick(width + 501.0);
        let [a, b] = floor.segment_rects();
        assert_eq!(b.left, width);
        assert_eq!(a.left, 2.0 * width);
    }

    #[test]
    fn test_no_recycling_while_stopped() {
        let mut floor = floor();
        floor.tick(100_000.0);
        assert_eq!(floor.segment_rects()[0].left, 0.0);
    }

    #[test]
    fn test_ground_always_under_a_moving_bird() {
        let mut floor = floor();
        floor.start_scrolling();
        let mut x = 0.0;
        while x < 20_000.0 {
            floor.tick(x);
            let body = Rect::from_center(Vec2::new(x, floor.ground_y() + 5.0), Vec2::new(34.0, 24.0));
            assert!(floor.touches(&body), "no ground under x={}", x);
            x += 3.3;
        }
    }

    #[test]
    fn test_touches_only_at_or_below_surface() {
        let floor = floor();
        let ground = floor.ground_y();
        let above = Rect::new(10.0, ground - 30.0, 40.0, ground - 1.0);
        let touching = Rect::new(10.0, ground - 20.0, 40.0, ground + 1.0);
        let buried = Rect::new(10.0, ground + 500.0, 40.0, ground + 520.0);
        assert!(!floor.touches(&above));
        assert!(floor.touches(&touching));
        assert!(floor.touches(&buried));
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut floor = floor();
        floor.start_scrolling();
        floor.tick(10_000.0);
        floor.reset();
        assert!(!floor.is_scrolling());
        assert_eq!(floor.segment_rects()[0].left, 0.0);
        assert_eq!(floor.segment_rects()[1].left, FloorConfig::default().width);
    }
}
