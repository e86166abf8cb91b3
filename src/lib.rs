//! Flappy - terminal Flappy Bird
//!
//! This module exposes the game logic for testing and headless use.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod geometry;
pub mod high_score;
pub mod input;
pub mod logging;
pub mod ui;

pub use config::GameConfig;
pub use game::{ActionOutcome, GameCoordinator, RunState, Signal};
pub use high_score::{FileHighScore, HighScoreStorage, MemoryHighScore};
