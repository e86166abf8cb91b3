//! A single pipe obstacle: top and bottom bodies around a gap, plus the
//! scoring strip the bird crosses after clearing the gap.

use crate::constants::PIPE_BODY_LENGTH;
use crate::geometry::{Rect, Vec2};

/// Receiver for scoring events raised by pipes.
pub trait ScoreSink {
    /// Whether scoring is currently allowed.
    fn is_running(&self) -> bool;
    fn increment_score(&mut self);
}

#[derive(Debug, Clone)]
pub struct PipePair {
    /// x = column centre, y = gap centre.
    position: Vec2,
    gap_size: f32,
    width: f32,
    score_area_width: f32,
    scored: bool,
    active: bool,
}

impl PipePair {
    /// Fresh, inactive pipe at the origin.
    pub fn new(gap_size: f32, width: f32, score_area_width: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            gap_size,
            width,
            score_area_width,
            scored: false,
            active: false,
        }
    }

    /// Prepare for reuse with a new gap size. Clears the scored flag.
    pub fn reconfigure(&mut self, gap_size: f32) {
        self.gap_size = gap_size;
        self.scored = false;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn gap_size(&self) -> f32 {
        self.gap_size
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn has_scored(&self) -> bool {
        self.scored
    }

    pub fn mark_as_scored(&mut self) {
        self.scored = true;
    }

    pub(crate) fn clear_scored(&mut self) {
        self.scored = false;
    }

    pub fn gap_top(&self) -> f32 {
        self.position.y - self.gap_size / 2.0
    }

    pub fn gap_bottom(&self) -> f32 {
        self.position.y + self.gap_size / 2.0
    }

    fn left(&self) -> f32 {
        self.position.x - self.width / 2.0
    }

    fn right(&self) -> f32 {
        self.position.x + self.width / 2.0
    }

    /// Solid body above the gap.
    pub fn top_body(&self) -> Rect {
        let bottom = self.gap_top();
        Rect::new(self.left(), bottom - PIPE_BODY_LENGTH, self.right(), bottom)
    }

    /// Solid body below the gap.
    pub fn bottom_body(&self) -> Rect {
        let top = self.gap_bottom();
        Rect::new(self.left(), top, self.right(), top + PIPE_BODY_LENGTH)
    }

    /// Trigger strip just past the trailing edge, exactly as tall as the gap.
    pub fn score_area(&self) -> Rect {
        let left = self.right();
        Rect::new(
            left,
            self.gap_top(),
            left + self.score_area_width,
            self.gap_bottom(),
        )
    }

    /// Report that `body` overlaps this pipe's scoring strip.
    ///
    /// Scores at most once per activation, and only while the sink says the
    /// session is running. Returns true when a point was awarded.
    pub fn on_body_overlap(&mut self, body: &Rect, sink: &mut dyn ScoreSink) -> bool {
        if !self.active || self.scored || !self.score_area().intersects(body) {
            return false;
        }
        if !sink.is_running() {
            return false;
        }
        self.scored = true;
        sink.increment_score();
        true
    }
}
