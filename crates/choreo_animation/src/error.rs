//! Animation engine error types

use thiserror::Error;

/// Configuration errors rejected at call time
#[derive(Error, Debug)]
pub enum ChainError {
    /// `animate`, `and_animate`, and `then_animate` need at least one target
    #[error("animation requires at least one target element")]
    EmptyTargets,
}

/// Declarative asset playback errors.
///
/// These are recovered locally by the sequencer: logged and swallowed,
/// never surfaced to the chain's start/stop callbacks.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    /// Asset could not be loaded or parsed
    #[error("asset load failed: {0}")]
    Load(String),

    /// Host has no declarative asset support
    #[error("asset playback is not supported by this host")]
    Unsupported,
}

/// Result type for chain construction
pub type Result<T> = std::result::Result<T, ChainError>;
