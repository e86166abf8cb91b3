//! High-score persistence.
//!
//! File format: exactly four bytes, the score as a little-endian `u32`.
//! Anything else on disk is treated as corrupt and read back as 0.

use crate::constants::{APP_NAME, HIGH_SCORE_FILE};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Backing store for the best score across sessions.
pub trait HighScoreStorage {
    /// Read the stored score. `NotFound` means nothing was ever saved.
    fn read(&self) -> io::Result<u32>;

    /// Persist `score`, replacing any previous value.
    fn write(&mut self, score: u32) -> io::Result<()>;

    /// Read the stored score, degrading every failure to 0.
    fn load(&self) -> u32 {
        match self.read() {
            Ok(score) => score,
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!(error = %e, "failed to load high score, resetting to 0");
                0
            }
        }
    }
}

/// Stores the high score in the platform data directory.
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    /// Creates a store at `<data_dir>/highscore.save`, creating the directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;

        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Ok(Self {
            path: data_dir.join(HIGH_SCORE_FILE),
        })
    }

    /// Creates a store at an explicit path. The parent directory is created on first write.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStorage for FileHighScore {
    fn read(&self) -> io::Result<u32> {
        let bytes = fs::read(&self.path)?;
        let raw: [u8; 4] = bytes.as_slice().try_into().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("high score file is {} bytes, expected 4", bytes.len()),
            )
        })?;
        Ok(u32::from_le_bytes(raw))
    }

    fn write(&mut self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, score.to_le_bytes())
    }
}

/// Keeps the high score in memory only. Used when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryHighScore {
    score: Option<u32>,
}

impl MemoryHighScore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStorage for MemoryHighScore {
    fn read(&self) -> io::Result<u32> {
        self.score
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no high score recorded"))
    }

    fn write(&mut self, score: u32) -> io::Result<()> {
        self.score = Some(score);
        Ok(())
    }
}
