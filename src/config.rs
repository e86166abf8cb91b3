//! Game tuning loaded from a JSON file.
//!
//! Every section carries `#[serde(default)]`, so a config file only needs the
//! values it wants to override. A missing file means defaults; a broken or
//! invalid file is reported and replaced by defaults.

use crate::constants::*;
use crate::geometry::Vec2;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Bird physics tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    /// Horizontal cruise speed while flying (px/s).
    pub speed: f32,
    /// Vertical velocity set by a flap (negative = up).
    pub jump_velocity: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub min_rotation: f32,
    pub max_rotation: f32,
    pub rotation_scale: f32,
    /// Smallest y the bird may reach.
    pub ceiling_y: f32,
    pub start_position: Vec2,
    pub size: Vec2,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            speed: BIRD_SPEED,
            jump_velocity: BIRD_JUMP_VELOCITY,
            gravity: BIRD_GRAVITY,
            max_fall_speed: BIRD_MAX_FALL_SPEED,
            min_rotation: BIRD_MIN_ROTATION,
            max_rotation: BIRD_MAX_ROTATION,
            rotation_scale: BIRD_ROTATION_SCALE,
            ceiling_y: BIRD_CEILING_Y,
            start_position: Vec2::new(BIRD_START_X, BIRD_START_Y),
            size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
        }
    }
}

/// Pipe spawning and pooling tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipesConfig {
    pub spacing: f32,
    pub gap_size: f32,
    /// Lowest allowed gap centre y.
    pub min_height: f32,
    /// Highest allowed gap centre y.
    pub max_height: f32,
    pub initial_pool_size: usize,
    pub spawn_lookahead: f32,
    pub initial_spawn_distance: f32,
    pub despawn_distance: f32,
    pub reset_spawn_distance: f32,
    pub pipe_width: f32,
    pub score_area_width: f32,
}

impl Default for PipesConfig {
    fn default() -> Self {
        Self {
            spacing: PIPE_SPACING,
            gap_size: PIPE_GAP_SIZE,
            min_height: PIPE_MIN_HEIGHT,
            max_height: PIPE_MAX_HEIGHT,
            initial_pool_size: PIPE_INITIAL_POOL_SIZE,
            spawn_lookahead: PIPE_SPAWN_LOOKAHEAD,
            initial_spawn_distance: PIPE_INITIAL_SPAWN_DISTANCE,
            despawn_distance: PIPE_DESPAWN_DISTANCE,
            reset_spawn_distance: PIPE_RESET_SPAWN_DISTANCE,
            pipe_width: PIPE_WIDTH,
            score_area_width: PIPE_SCORE_AREA_WIDTH,
        }
    }
}

/// Floor placement and recycling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    pub width: f32,
    pub despawn_offset: f32,
    pub ground_y: f32,
    pub height: f32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            width: FLOOR_WIDTH,
            despawn_offset: FLOOR_DESPAWN_OFFSET,
            ground_y: FLOOR_GROUND_Y,
            height: FLOOR_HEIGHT,
        }
    }
}

/// Session flow timing and cosmetics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds between the crash and the game-over screen.
    pub game_over_delay: f32,
    pub background_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_over_delay: GAME_OVER_DELAY_SECS,
            background_count: BACKGROUND_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub bird: BirdConfig,
    pub pipes: PipesConfig,
    pub floor: FloorConfig,
    pub session: SessionConfig,
}

impl GameConfig {
    /// Default config file location (`<config_dir>/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Parse and validate a config file.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults on any problem.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("no config path available, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file, using defaults");
                Self::default()
            }
        }
    }

    /// Reject values that would make the game unplayable or loop forever.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: &str| Err(io::Error::new(io::ErrorKind::InvalidData, msg.to_string()));

        if !self.all_finite() {
            return invalid("config values must be finite numbers");
        }

        let p = &self.pipes;
        if p.pipe_width <= 0.0 || p.score_area_width <= 0.0 {
            return invalid("pipe widths must be positive");
        }
        // Pipes closer than their own width would overlap and flood the pool.
        if p.spacing < p.pipe_width {
            return invalid("pipes.spacing must be at least pipes.pipe_width");
        }
        if p.gap_size <= 0.0 {
            return invalid("pipes.gap_size must be positive");
        }
        if p.min_height > p.max_height {
            return invalid("pipes.min_height must not exceed pipes.max_height");
        }
        if p.spawn_lookahead < 0.0 || p.despawn_distance < 0.0 || p.reset_spawn_distance < 0.0 {
            return invalid("pipes distances must be non-negative");
        }
        let pipes_in_flight =
            (p.spawn_lookahead + p.despawn_distance + p.initial_spawn_distance.abs()) / p.spacing;
        if pipes_in_flight > MAX_PIPES_IN_FLIGHT as f32 {
            return invalid("pipes lookahead and despawn distance span too many pipes");
        }
        if p.initial_pool_size > MAX_PIPES_IN_FLIGHT {
            return invalid("pipes.initial_pool_size is too large");
        }

        let b = &self.bird;
        if b.min_rotation > b.max_rotation {
            return invalid("bird.min_rotation must not exceed bird.max_rotation");
        }
        if b.size.x <= 0.0 || b.size.y <= 0.0 {
            return invalid("bird.size must be positive");
        }
        if b.max_fall_speed < 0.0 {
            return invalid("bird.max_fall_speed must be non-negative");
        }

        if self.floor.width <= 0.0 {
            return invalid("floor.width must be positive");
        }
        if self.session.game_over_delay < 0.0 {
            return invalid("session.game_over_delay must be non-negative");
        }

        Ok(())
    }

    fn all_finite(&self) -> bool {
        let b = &self.bird;
        let p = &self.pipes;
        let f = &self.floor;
        [
            b.speed,
            b.jump_velocity,
            b.gravity,
            b.max_fall_speed,
            b.min_rotation,
            b.max_rotation,
            b.rotation_scale,
            b.ceiling_y,
            b.start_position.x,
            b.start_position.y,
            b.size.x,
            b.size.y,
            p.spacing,
            p.gap_size,
            p.min_height,
            p.max_height,
            p.spawn_lookahead,
            p.initial_spawn_distance,
            p.despawn_distance,
            p.reset_spawn_distance,
            p.pipe_width,
            p.score_area_width,
            f.width,
            f.despawn_offset,
            f.ground_y,
            f.height,
            self.session.game_over_delay,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "pipes": { "spacing": 450.0 } }"#).unwrap();
        assert_eq!(config.pipes.spacing, 450.0);
        assert_eq!(config.pipes.gap_size, PIPE_GAP_SIZE);
        assert_eq!(config.bird, BirdConfig::default());
    }

    #[test]
    fn test_inverted_height_range_rejected() {
        let mut config = GameConfig::default();
        config.pipes.min_height = 600.0;
        config.pipes.max_height = 100.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let mut config = GameConfig::default();
        config.pipes.spacing = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spacing_narrower_than_pipe_rejected() {
        let mut config = GameConfig::default();
        config.pipes.spacing = config.pipes.pipe_width - 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_runaway_lookahead_rejected() {
        let mut config = GameConfig::default();
        config.pipes.spawn_lookahead = 1.0e9;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.pipes.initial_pool_size = 1_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut config = GameConfig::default();
        config.bird.gravity = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.pipes.max_height = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_tiny_spacing_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "pipes": { "spacing": 0.00001 } }"#).unwrap();

        let config = GameConfig::load_or_default(Some(&path));
        assert_eq!(config, GameConfig::default());

        // The loaded config must drive the spawner to completion.
        let mut pipes = crate::game::Pipes::new(&config.pipes, 0.0);
        pipes.start_spawning();
        pipes.tick(0.0, &mut rand::thread_rng());
        assert_eq!(pipes.active_count(), 2);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(Some(&dir.path().join("nope.json")));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_garbage_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(GameConfig::load_or_default(Some(&path)), GameConfig::default());
    }

    #[test]
    fn test_load_invalid_values_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "pipes": { "spacing": -5.0 } }"#).unwrap();
        assert_eq!(GameConfig::load_or_default(Some(&path)), GameConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "session": { "game_over_delay": 2.5 } }"#).unwrap();
        let config = GameConfig::load_or_default(Some(&path));
        assert_eq!(config.session.game_over_delay, 2.5);
    }
}
