//! File-backed store (XDG config dir or ~/.config/termtris/highscore).

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{parse_score, HighScoreStore, Result, StoreError};

const APP_DIR: &str = "termtris";
const FILENAME: &str = "highscore";

/// Default location of the high score file, from the current environment.
pub fn default_path() -> PathBuf {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

/// `$XDG_CONFIG_HOME/termtris/highscore`, else `$HOME/.config/termtris/highscore`,
/// else relative to the working directory. Empty variables count as unset.
fn config_path_from(xdg: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let base = match xdg.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => home
            .filter(|v| !v.is_empty())
            .map(|h| PathBuf::from(h).join(".config"))
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    base.join(APP_DIR).join(FILENAME)
}

/// One decimal integer in a text file.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_path`].
    pub fn at_default_path() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    /// A missing file reads as 0. So does unreadable content, with a warning:
    /// a corrupt file must not keep the game from starting.
    fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                return Ok(0);
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        match parse_score(&text) {
            Ok(score) => Ok(score),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable high score");
                Ok(0)
            }
        }
    }

    /// Creates the parent directory if needed.
    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, format!("{score}\n"))?;
        Ok(())
    }
}
