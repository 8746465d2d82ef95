#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use builder::*;
pub use engine::*;
pub use error::*;
pub use types::*;

mod builder;
mod engine;
mod error;
mod types;

/// Ordered cell path of one word. Hand-authored paths are short, so they live
/// inline.
pub type WordPath = SmallVec<[Coord2; 8]>;

/// A target word bound to its path through the grid, one cell per letter.
/// Built once by [`PuzzleBuilder`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordPlacement {
    word: String,
    path: WordPath,
    clue: String,
}

impl WordPlacement {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn path(&self) -> &[Coord2] {
        &self.path
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn covers(&self, coords: Coord2) -> bool {
        self.path.contains(&coords)
    }

    pub(crate) fn new(word: String, path: WordPath, clue: String) -> Self {
        Self { word, path, clue }
    }
}

/// The finished puzzle: letter grid, playable mask, and placement list.
///
/// Read-only after construction; every letter the sessions judge against is
/// derivable from here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleLayout {
    grid: Array2<u8>,
    playable: Array2<bool>,
    placements: Vec<WordPlacement>,
}

impl PuzzleLayout {
    pub(crate) fn new(grid: Array2<u8>, playable: Array2<bool>, placements: Vec<WordPlacement>) -> Self {
        Self {
            grid,
            playable,
            placements,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.grid.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn letter_at(&self, coords: Coord2) -> char {
        self.grid[coords.to_nd_index()].into()
    }

    /// A cell is playable when it belongs to at least one placement's path.
    pub fn is_playable(&self, coords: Coord2) -> bool {
        self.playable[coords.to_nd_index()]
    }

    /// Ground-truth letter for a playable cell, `None` for filler cells.
    pub fn solution_letter_at(&self, coords: Coord2) -> Option<char> {
        self.is_playable(coords).then(|| self.letter_at(coords))
    }

    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    pub fn placement_of(&self, word: &str) -> Option<&WordPlacement> {
        self.placements.iter().find(|p| p.word == word)
    }

    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    pub fn playable_cell_count(&self) -> CellCount {
        self.playable
            .iter()
            .filter(|&&playable| playable)
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn iter_playable(&self) -> impl Iterator<Item = Coord2> + '_ {
        let (rows, cols) = self.size();
        (0..rows)
            .flat_map(move |r| (0..cols).map(move |c| (r, c)))
            .filter(|&coords| self.is_playable(coords))
    }
}

impl Index<Coord2> for PuzzleLayout {
    type Output = u8;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickOutcome {
    Picked,
    AlreadySelected,
    Locked,
}

impl PickOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Picked)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectionEdit {
    NoChange,
    Changed,
}

impl SelectionEdit {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfirmOutcome {
    /// Confirm pressed with nothing selected.
    NoSelection,
    /// Selection matches no remaining word; the selection is kept so the
    /// player can undo or clear it themselves.
    NoMatch,
    Found(String),
    /// The found word completed the target set. Emitted exactly once.
    Won(String),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EntryOutcome {
    Set,
    /// Cell is not playable or the input is not a letter.
    Rejected,
    NoChange,
}

impl EntryOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Set)
    }
}
