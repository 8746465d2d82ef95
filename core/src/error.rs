use alloc::string::String;
use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Word {0:?} is empty or not ASCII alphabetic")]
    InvalidWord(String),
    #[error("Word {0:?} is placed more than once")]
    DuplicateWord(String),
    #[error("Word {word:?} has {letters} letters but its path has {cells} cells")]
    PathLengthMismatch {
        word: String,
        letters: usize,
        cells: usize,
    },
    #[error("Path of {word:?} visits {at:?} twice")]
    RepeatedPathCell { word: String, at: Coord2 },
    #[error("Words {word:?} and {other:?} disagree on the letter at {at:?}")]
    PlacementConflict {
        word: String,
        other: String,
        at: Coord2,
    },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
