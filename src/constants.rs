// Engine timing
pub const PHYSICS_TICK_SECS: f32 = 1.0 / 60.0;
pub const MAX_FRAME_DELTA_SECS: f32 = 0.1;
pub const FRAME_INTERVAL_MS: u64 = 16;

// World extents (pixels, y grows downward)
pub const VIEWPORT_WIDTH: f32 = 1152.0;
pub const VIEWPORT_HEIGHT: f32 = 648.0;
pub const CAMERA_OFFSET_X: f32 = 100.0;

// Bird
pub const BIRD_SPEED: f32 = 200.0;
pub const BIRD_JUMP_VELOCITY: f32 = -400.0;
pub const BIRD_GRAVITY: f32 = 1000.0;
pub const BIRD_MAX_FALL_SPEED: f32 = 800.0;
pub const BIRD_MIN_ROTATION: f32 = -0.5;
pub const BIRD_MAX_ROTATION: f32 = 1.5;
pub const BIRD_ROTATION_SCALE: f32 = 0.002;
pub const BIRD_CEILING_Y: f32 = 100.0;
pub const BIRD_START_X: f32 = 0.0;
pub const BIRD_START_Y: f32 = 300.0;
pub const BIRD_WIDTH: f32 = 34.0;
pub const BIRD_HEIGHT: f32 = 24.0;

// Pipes
pub const PIPE_SPACING: f32 = 600.0;
pub const PIPE_GAP_SIZE: f32 = 200.0;
pub const PIPE_MIN_HEIGHT: f32 = 120.0;
pub const PIPE_MAX_HEIGHT: f32 = 500.0;
pub const PIPE_INITIAL_POOL_SIZE: usize = 8;
pub const PIPE_SPAWN_LOOKAHEAD: f32 = 1200.0;
pub const PIPE_INITIAL_SPAWN_DISTANCE: f32 = 400.0;
pub const PIPE_DESPAWN_DISTANCE: f32 = 800.0;
pub const PIPE_RESET_SPAWN_DISTANCE: f32 = 800.0;
pub const PIPE_WIDTH: f32 = 104.0;
pub const PIPE_SCORE_AREA_WIDTH: f32 = 20.0;
/// Upper bound on pipes alive at once; configs implying more are rejected.
pub const MAX_PIPES_IN_FLIGHT: usize = 64;
/// Pipe bodies are modelled as finite boxes this tall, enough to cover the viewport.
pub const PIPE_BODY_LENGTH: f32 = 1000.0;

// Floor
pub const FLOOR_WIDTH: f32 = 1152.0;
pub const FLOOR_DESPAWN_OFFSET: f32 = 500.0;
pub const FLOOR_GROUND_Y: f32 = 600.0;
pub const FLOOR_HEIGHT: f32 = 48.0;

// Session
pub const GAME_OVER_DELAY_SECS: f32 = 1.0;
pub const GAME_OVER_BLINK_DELAY_SECS: f32 = 0.5;
pub const BACKGROUND_COUNT: usize = 3;

// Persistence
pub const APP_NAME: &str = "flappy";
pub const HIGH_SCORE_FILE: &str = "highscore.save";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
pub const LOG_ENV_VAR: &str = "FLAPPY_LOG";
