//! Pipe spawner.
//!
//! Pipes are stationary in world space; the bird flies through them. Spawning
//! and recycling are driven purely by the bird's x position: new pipes are
//! placed until the lookahead window ahead of the bird is filled, and pipes
//! that fall far enough behind go back to the pool.

use super::pipe_pair::{PipePair, ScoreSink};
use super::pool::{PipeHandle, PipePool, PipeTemplate};
use crate::config::PipesConfig;
use crate::geometry::{Rect, Vec2};
use rand::Rng;
use tracing::trace;

#[derive(Debug)]
pub struct Pipes {
    config: PipesConfig,
    pool: PipePool,
    /// Active pipes in spawn order (ascending x).
    active: Vec<PipeHandle>,
    next_pipe_x: f32,
    spawning: bool,
}

impl Pipes {
    /// Build the spawner and warm its pool. The first pipe will appear
    /// `initial_spawn_distance` ahead of `bird_x`.
    pub fn new(config: &PipesConfig, bird_x: f32) -> Self {
        let mut pool = PipePool::new(PipeTemplate {
            gap_size: config.gap_size,
            width: config.pipe_width,
            score_area_width: config.score_area_width,
        });
        pool.warm_up(config.initial_pool_size);

        Self {
            config: config.clone(),
            pool,
            active: Vec::new(),
            next_pipe_x: bird_x + config.initial_spawn_distance,
            spawning: false,
        }
    }

    pub fn start_spawning(&mut self) {
        self.spawning = true;
    }

    pub fn stop_spawning(&mut self) {
        self.spawning = false;
    }

    pub fn is_spawning(&self) -> bool {
        self.spawning
    }

    /// Per-frame update. Does nothing unless spawning is enabled.
    pub fn tick<R: Rng>(&mut self, bird_x: f32, rng: &mut R) {
        if !self.spawning {
            return;
        }

        while self.next_pipe_x < bird_x + self.config.spawn_lookahead {
            self.spawn_pipe_pair(self.next_pipe_x, rng);
            self.next_pipe_x += self.config.spacing;
        }

        let threshold = bird_x - self.config.despawn_distance;
        let pool = &mut self.pool;
        self.active.retain(|&handle| {
            if pool.get(handle).position().x < threshold {
                trace!(pipe = handle.index(), "recycling pipe");
                pool.release(handle);
                false
            } else {
                true
            }
        });
    }

    fn spawn_pipe_pair<R: Rng>(&mut self, x: f32, rng: &mut R) {
        let gap_center = rng.gen_range(self.config.min_height..=self.config.max_height);
        let handle = self.pool.acquire();

        let pipe = self.pool.get_mut(handle);
        pipe.reconfigure(self.config.gap_size);
        pipe.set_position(Vec2::new(x, gap_center));

        trace!(pipe = handle.index(), x, gap_center, "spawned pipe");
        self.active.push(handle);
    }

    /// Return every active pipe to the pool and restart spawning
    /// `reset_spawn_distance` ahead of `bird_x`.
    pub fn reset(&mut self, bird_x: f32) {
        for handle in self.active.drain(..) {
            self.pool.release(handle);
        }
        self.next_pipe_x = bird_x + self.config.reset_spawn_distance;
    }

    /// Offer the bird's box to every active pipe's scoring strip.
    /// Returns the number of points awarded.
    pub fn check_scoring(&mut self, body: &Rect, sink: &mut dyn ScoreSink) -> u32 {
        let mut awarded = 0;
        for &handle in &self.active {
            if self.pool.get_mut(handle).on_body_overlap(body, sink) {
                awarded += 1;
            }
        }
        awarded
    }

    /// Fill `out` with the solid bodies of all active pipes.
    pub fn collect_solids(&self, out: &mut Vec<Rect>) {
        out.clear();
        for pipe in self.active() {
            out.push(pipe.top_body());
            out.push(pipe.bottom_body());
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &PipePair> + '_ {
        self.active.iter().map(move |&handle| self.pool.get(handle))
    }

    pub fn active_handles(&self) -> &[PipeHandle] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn next_pipe_x(&self) -> f32 {
        self.next_pipe_x
    }

    pub fn pool(&self) -> &PipePool {
        &self.pool
    }
}
