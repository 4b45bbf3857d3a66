//! High-score persistence.
//!
//! The file holds a single JSON value: a *string* of decimal digits, e.g.
//! `"1500"`. Files written by hand as a bare number (`1500`) are read too,
//! but writes always use the string form so older readers keep working.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name used when no other path is given.
pub const DEFAULT_FILE_NAME: &str = "data.json";

#[derive(Debug, thiserror::Error)]
pub enum HighScoreError {
    #[error("failed to access high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("high score file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored high score {0:?} is not a whole number")]
    Parse(String),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredScore {
    Text(String),
    Number(u32),
}

#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl Default for HighScoreStore {
    fn default() -> Self {
        HighScoreStore::new(DEFAULT_FILE_NAME)
    }
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score. A missing file is `Ok(None)`; anything
    /// else that goes wrong is an error.
    pub fn load(&self) -> Result<Option<u32>, HighScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(HighScoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str::<StoredScore>(&raw)? {
            StoredScore::Number(n) => Ok(Some(n)),
            StoredScore::Text(text) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| HighScoreError::Parse(text)),
        }
    }

    /// Write `score` if there is no stored value yet or it beats the stored
    /// one. Returns whether the file was written.
    pub fn save_if_higher(&self, score: u32) -> Result<bool, HighScoreError> {
        if let Some(stored) = self.load()? {
            if stored >= score {
                return Ok(false);
            }
        }
        self.write(score)?;
        Ok(true)
    }

    fn write(&self, score: u32) -> Result<(), HighScoreError> {
        let json = serde_json::to_string(&StoredScore::Text(score.to_string()))?;
        fs::write(&self.path, json).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
