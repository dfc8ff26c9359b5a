//! Error type shared by the library.
//!
//! A user quitting is not an error; it travels up the scene stack as
//! `SceneSignal::QuitRequested` instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Writing to the terminal or reading the config file failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config could not be serialised.
    #[error("config serialisation failed: {0}")]
    Config(#[from] serde_json::Error),

    /// A texture in the bundle is unusable (e.g. zero-sized).
    #[error("invalid texture '{name}': {reason}")]
    InvalidTexture { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
