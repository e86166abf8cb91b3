//! Reusable storage for pipe obstacles.
//!
//! Pipes live in an arena that only ever grows. A handle is an index into the
//! arena; at any time each handle is either queued as free or handed out as
//! active, never both.

use super::pipe_pair::PipePair;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Stable reference to a pooled pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipeHandle(usize);

impl PipeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Shape used when the pool has to create a pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeTemplate {
    pub gap_size: f32,
    pub width: f32,
    pub score_area_width: f32,
}

#[derive(Debug)]
pub struct PipePool {
    pipes: Vec<PipePair>,
    free: VecDeque<PipeHandle>,
    template: PipeTemplate,
    warmed_up: bool,
    cold_allocations: usize,
}

impl PipePool {
    pub fn new(template: PipeTemplate) -> Self {
        Self {
            pipes: Vec::new(),
            free: VecDeque::new(),
            template,
            warmed_up: false,
            cold_allocations: 0,
        }
    }

    /// Pre-allocate `n` inactive pipes. Only the first call has any effect.
    pub fn warm_up(&mut self, n: usize) {
        if self.warmed_up {
            warn!("pipe pool already warmed up, ignoring request for {} more", n);
            return;
        }
        self.warmed_up = true;
        self.pipes.reserve(n);
        for _ in 0..n {
            let handle = self.allocate();
            self.free.push_back(handle);
        }
        debug!(size = n, "pipe pool warmed up");
    }

    /// Take a pipe from the free queue, creating one if the queue is empty.
    ///
    /// The returned pipe is active and has its scored flag cleared.
    pub fn acquire(&mut self) -> PipeHandle {
        let handle = match self.free.pop_front() {
            Some(handle) => handle,
            None => {
                self.cold_allocations += 1;
                debug!(total = self.pipes.len() + 1, "pipe pool empty, allocating new pipe");
                self.allocate()
            }
        };

        let pipe = &mut self.pipes[handle.0];
        pipe.set_active(true);
        pipe.clear_scored();
        handle
    }

    /// Deactivate a pipe and queue it for reuse.
    ///
    /// Releasing the same handle twice without an acquire in between is a
    /// caller bug and corrupts the free queue.
    pub fn release(&mut self, handle: PipeHandle) {
        let pipe = &mut self.pipes[handle.0];
        debug_assert!(pipe.is_active(), "released an inactive pipe: {:?}", handle);
        pipe.set_active(false);
        self.free.push_back(handle);
    }

    pub fn get(&self, handle: PipeHandle) -> &PipePair {
        &self.pipes[handle.0]
    }

    pub fn get_mut(&mut self, handle: PipeHandle) -> &mut PipePair {
        &mut self.pipes[handle.0]
    }

    /// Total pipes ever created.
    pub fn capacity(&self) -> usize {
        self.pipes.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn is_free(&self, handle: PipeHandle) -> bool {
        self.free.contains(&handle)
    }

    /// Number of acquires that found the free queue empty.
    pub fn cold_allocations(&self) -> usize {
        self.cold_allocations
    }

    fn allocate(&mut self) -> PipeHandle {
        let t = self.template;
        self.pipes
            .push(PipePair::new(t.gap_size, t.width, t.score_area_width));
        PipeHandle(self.pipes.len() - 1)
    }
}
