//! Game-specific error types.
//!
//! Level construction goes through these types rather than indexing blindly:
//! a level id with no catalog entry is a reported failure, not a silent no-op.

use std::fmt;

/// Top-level error enum for the ricochet core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A level index was requested that has no entry in the level catalog.
    /// Raised during level construction; halts the build instead of leaving
    /// the world without geometry.
    UnknownLevel {
        /// The level that was requested.
        level: u32,
        /// Highest level id the catalog defines.
        highest: u32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownLevel { level, highest } => write!(
                f,
                "no layout for level {} in the level catalog (highest defined: {})",
                level, highest
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
