//! Persisted high score
//!
//! A single non-negative integer in a plain-text file. Reads never fail:
//! a missing or unparsable file counts as 0.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::persistence::write_atomic;

/// Failure to write the high score
#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Storage for the best score across sessions
pub trait HighScoreStore {
    /// Stored high score (0 when none)
    fn load(&self) -> u64;

    /// Overwrite the stored value
    fn store(&mut self, score: u64) -> Result<(), HighScoreError>;

    /// Persist `score` only if it beats the stored value.
    /// Returns true when the stored value changed.
    fn save_if_higher(&mut self, score: f32) -> Result<bool, HighScoreError> {
        let score = score.max(0.0) as u64;
        if score > self.load() {
            self.store(score)?;
            log::info!("High score saved: {}", score);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// Plain-text file store
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse stored file contents; anything but a non-negative number is 0
fn parse_score(contents: &str) -> u64 {
    let trimmed = contents.trim();
    if let Ok(score) = trimmed.parse::<u64>() {
        return score;
    }
    // Older files may hold a float
    match trimmed.parse::<f64>() {
        Ok(score) if score.is_finite() && score >= 0.0 => score as u64,
        _ => 0,
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u64 {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => parse_score(&contents),
            Err(e) => {
                log::debug!("No high score at {} ({e})", self.path.display());
                0
            }
        }
    }

    fn store(&mut self, score: u64) -> Result<(), HighScoreError> {
        write_atomic(&self.path, score.to_string().as_bytes()).map_err(|source| {
            HighScoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub score: u64,
    /// Number of successful writes
    pub writes: u32,
}

impl MemoryHighScoreStore {
    pub fn new(score: u64) -> Self {
        Self { score, writes: 0 }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u64 {
        self.score
    }

    fn store(&mut self, score: u64) -> Result<(), HighScoreError> {
        self.score = score;
        self.writes += 1;
        Ok(())
    }
}
