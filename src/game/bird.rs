//! The bird: a physics body with an Idle → Flying → Dead → Stopped lifecycle.

use crate::config::BirdConfig;
use crate::geometry::{move_and_slide, Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdState {
    /// Hovering at the start position, no physics.
    Idle,
    /// Gravity, flaps, cruise speed and pipe collisions.
    Flying,
    /// Falling straight down after a crash. Pipes no longer collide.
    Dead,
    /// Resting on the ground, frozen.
    Stopped,
}

/// Events the bird reports to its owner from a physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdEvent {
    /// Hit a pipe this step.
    Died,
}

#[derive(Debug, Clone)]
pub struct Bird {
    config: BirdConfig,
    position: Vec2,
    velocity: Vec2,
    rotation: f32,
    state: BirdState,
    collides_with_pipes: bool,
}

impl Bird {
    pub fn new(config: &BirdConfig) -> Self {
        Self {
            config: config.clone(),
            position: config.start_position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            state: BirdState::Idle,
            collides_with_pipes: true,
        }
    }

    /// Advance one fixed physics step against the given pipe bodies.
    ///
    /// Only Flying and Dead birds move. The ceiling clamp is applied after
    /// integration, so a step never ends above `ceiling_y`.
    pub fn physics_step(&mut self, dt: f32, solids: &[Rect]) -> Option<BirdEvent> {
        let flying = match self.state {
            BirdState::Flying => true,
            BirdState::Dead => false,
            BirdState::Idle | BirdState::Stopped => return None,
        };

        let mut velocity = self.velocity;
        velocity.y = (velocity.y + self.config.gravity * dt).min(self.config.max_fall_speed);
        velocity.x = if flying { self.config.speed } else { 0.0 };

        let solids: &[Rect] = if flying && self.collides_with_pipes {
            solids
        } else {
            &[]
        };
        let slide = move_and_slide(self.bounds(), velocity * dt, solids);
        self.position += slide.applied;

        if self.position.y < self.config.ceiling_y {
            self.position.y = self.config.ceiling_y;
            velocity.y = velocity.y.max(0.0);
        }

        self.velocity = velocity;
        self.rotation = (velocity.y * self.config.rotation_scale)
            .clamp(self.config.min_rotation, self.config.max_rotation);

        if flying && slide.collided() && self.on_pipe_hit() {
            return Some(BirdEvent::Died);
        }
        None
    }

    /// Set vertical velocity to the flap impulse. Only works while flying.
    pub fn flap(&mut self) -> bool {
        if self.state != BirdState::Flying {
            return false;
        }
        self.velocity.y = self.config.jump_velocity;
        true
    }

    /// Idle → Flying.
    pub fn start_flying(&mut self) {
        if self.state != BirdState::Idle {
            return;
        }
        self.state = BirdState::Flying;
        self.rotation = 0.0;
        self.velocity.x = self.config.speed;
        self.collides_with_pipes = true;
    }

    /// Flying → Dead. Returns false (and does nothing) in any other state.
    pub fn on_pipe_hit(&mut self) -> bool {
        if self.state != BirdState::Flying {
            return false;
        }
        self.state = BirdState::Dead;
        self.collides_with_pipes = false;
        self.velocity.x = 0.0;
        true
    }

    /// Freeze on ground contact. Applies to a flying or dead bird.
    pub fn stop_falling(&mut self) {
        if matches!(self.state, BirdState::Flying | BirdState::Dead) {
            self.state = BirdState::Stopped;
            self.velocity = Vec2::ZERO;
            self.collides_with_pipes = false;
        }
    }

    /// Back to the start position, idle and ready for the next flight.
    pub fn reset(&mut self) {
        self.position = self.config.start_position;
        self.velocity = Vec2::ZERO;
        self.rotation = 0.0;
        self.state = BirdState::Idle;
        self.collides_with_pipes = true;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.position, self.config.size)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn state(&self) -> BirdState {
        self.state
    }

    pub fn is_flying(&self) -> bool {
        self.state == BirdState::Flying
    }

    /// True once the bird has crashed, including after it came to rest.
    pub fn is_dead(&self) -> bool {
        matches!(self.state, BirdState::Dead | BirdState::Stopped)
    }

    pub fn collides_with_pipes(&self) -> bool {
        self.collides_with_pipes
    }
}
