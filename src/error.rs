//! Error types for session construction and the score/settings files.
//!
//! The simulation itself has no recoverable failures: every input is either
//! generated internally or drawn from a fixed action set. Errors only arise
//! at the edges, when a frame rate or window size is supplied, or when a
//! file is touched.

use std::fmt;
use std::path::PathBuf;

use crate::consts::MAX_FPS;

#[derive(Debug)]
pub enum GameError {
    /// Frame rate must satisfy `0 < fps < MAX_FPS`.
    InvalidFrameRate { fps: u32 },
    /// Window dimensions must be finite and positive.
    InvalidBounds { width: f32, height: f32 },
    /// A gameplay tunable is out of range.
    InvalidTuning { reason: &'static str },
    /// Reading or writing a file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A settings file exists but is not valid JSON for [`crate::Settings`].
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl GameError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrameRate { fps } => {
                write!(f, "invalid frame rate: {fps} (allowed 1..{MAX_FPS})")
            }
            Self::InvalidBounds { width, height } => {
                write!(f, "invalid window bounds: {width}x{height}")
            }
            Self::InvalidTuning { reason } => write!(f, "invalid tuning: {reason}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::SettingsParse { path, source } => {
                write!(f, "malformed settings in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::SettingsParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reject frame rates that cannot divide per-tick displacement
pub fn validate_frame_rate(fps: u32) -> Result<u32, GameError> {
    if fps == 0 || fps >= MAX_FPS {
        return Err(GameError::InvalidFrameRate { fps });
    }
    Ok(fps)
}
