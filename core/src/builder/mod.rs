use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Fills the cells left unset after word placement. Injectable so tests and
/// replays can pin the filler letters down.
pub trait GridFiller {
    fn fill(self, grid: &mut Array2<u8>);
}

/// Declarative description of one target word: the word, its hand-authored
/// cell path, and the clue shown to the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordSpec {
    pub word: String,
    pub path: WordPath,
    pub clue: String,
}

impl WordSpec {
    pub fn new(
        word: impl Into<String>,
        path: impl IntoIterator<Item = Coord2>,
        clue: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            path: path.into_iter().collect(),
            clue: clue.into(),
        }
    }
}

/// Builds a [`PuzzleLayout`] from a word list.
///
/// Placement is strict: a cell claimed by two words with different letters
/// fails the whole build with [`GameError::PlacementConflict`] naming both
/// words and the cell, instead of silently dropping the later word.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleBuilder {
    size: Coord2,
    words: Vec<WordSpec>,
}

impl PuzzleBuilder {
    pub fn new(size: Coord2) -> Self {
        Self {
            size,
            words: Vec::new(),
        }
    }

    pub fn word(mut self, spec: WordSpec) -> Self {
        self.words.push(spec);
        self
    }

    pub fn words(mut self, specs: impl IntoIterator<Item = WordSpec>) -> Self {
        self.words.extend(specs);
        self
    }

    pub fn build(self, filler: impl GridFiller) -> Result<PuzzleLayout> {
        let nd_size = self.size.to_nd_index();
        let mut grid: Array2<u8> = Array2::from_elem(nd_size, UNSET);
        let mut playable: Array2<bool> = Array2::default(nd_size);
        // cell -> index of the placement that set its letter first
        let mut owner: Array2<Option<usize>> = Array2::default(nd_size);
        let mut placements: Vec<WordPlacement> = Vec::with_capacity(self.words.len());

        for spec in self.words {
            let letters = fold_word(&spec.word)?;
            let folded: String = letters.iter().map(|&b| char::from(b)).collect();
            // word names key the found set, so each may be placed only once
            if placements.iter().any(|p| p.word() == folded) {
                return Err(GameError::DuplicateWord(folded));
            }
            let path = validate_path(&spec.word, &spec.path, letters.len(), self.size)?;

            for (&coords, &letter) in path.iter().zip(&letters) {
                let nd = coords.to_nd_index();
                match owner[nd] {
                    Some(prev) if grid[nd] != letter => {
                        return Err(GameError::PlacementConflict {
                            word: spec.word,
                            other: placements[prev].word().into(),
                            at: coords,
                        });
                    }
                    Some(_) => {}
                    None => {
                        grid[nd] = letter;
                        owner[nd] = Some(placements.len());
                    }
                }
                playable[nd] = true;
            }

            placements.push(WordPlacement::new(folded, path, spec.clue));
        }

        filler.fill(&mut grid);
        debug_assert!(grid.iter().all(|&cell| cell != UNSET));

        Ok(PuzzleLayout::new(grid, playable, placements))
    }
}

fn fold_word(word: &str) -> Result<Vec<u8>> {
    let letters: Vec<u8> = word.chars().filter_map(fold_letter).collect();
    if letters.is_empty() || letters.len() != word.chars().count() {
        return Err(GameError::InvalidWord(word.into()));
    }
    Ok(letters)
}

fn validate_path(word: &str, path: &[Coord2], letters: usize, size: Coord2) -> Result<WordPath> {
    if path.len() != letters {
        return Err(GameError::PathLengthMismatch {
            word: word.into(),
            letters,
            cells: path.len(),
        });
    }

    for (i, &coords) in path.iter().enumerate() {
        if coords.0 >= size.0 || coords.1 >= size.1 {
            return Err(GameError::InvalidCoords);
        }
        if path[..i].contains(&coords) {
            return Err(GameError::RepeatedPathCell {
                word: word.into(),
                at: coords,
            });
        }
    }

    Ok(path.iter().copied().collect())
}
