use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Active,
    Won,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Active
    }
}

/// Selection-variant session: the player picks cells in order and confirms
/// the pick against the placement paths.
///
/// All mutable play state lives here; the layout is consulted but never
/// touched, so independent sessions can share nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectGame {
    layout: PuzzleLayout,
    selection: Vec<Coord2>,
    found: BTreeSet<String>,
    state: SessionState,
}

impl SelectGame {
    pub fn new(layout: PuzzleLayout) -> Self {
        if layout.placements().is_empty() {
            log::warn!("Layout has no word placements, session starts degraded");
        }
        Self {
            layout,
            selection: Vec::new(),
            found: BTreeSet::new(),
            state: Default::default(),
        }
    }

    pub fn layout(&self) -> &PuzzleLayout {
        &self.layout
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn selection(&self) -> &[Coord2] {
        &self.selection
    }

    /// Letters along the current selection, in pick order.
    pub fn selected_text(&self) -> String {
        self.selection
            .iter()
            .map(|&coords| self.layout.letter_at(coords))
            .collect()
    }

    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(String::as_str)
    }

    pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
        self.sorted_placements()
            .filter(|p| !self.found.contains(p.word()))
            .map(WordPlacement::word)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_selected(&self, coords: Coord2) -> bool {
        self.selection.contains(&coords)
    }

    /// Cells of already-found words are locked against further picks.
    pub fn is_found_cell(&self, coords: Coord2) -> bool {
        self.layout
            .placements()
            .iter()
            .filter(|p| self.found.contains(p.word()))
            .any(|p| p.covers(coords))
    }

    pub fn pick(&mut self, coords: Coord2) -> Result<PickOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_active()?;

        Ok(if self.is_found_cell(coords) {
            PickOutcome::Locked
        } else if self.is_selected(coords) {
            PickOutcome::AlreadySelected
        } else {
            self.selection.push(coords);
            PickOutcome::Picked
        })
    }

    pub fn undo_last(&mut self) -> SelectionEdit {
        if self.selection.pop().is_some() {
            SelectionEdit::Changed
        } else {
            SelectionEdit::NoChange
        }
    }

    pub fn clear_selection(&mut self) -> SelectionEdit {
        if self.selection.is_empty() {
            SelectionEdit::NoChange
        } else {
            self.selection.clear();
            SelectionEdit::Changed
        }
    }

    /// Judges the current selection against every remaining word, in
    /// alphabetical order so ambiguous selections resolve deterministically.
    /// A path matches forward or exactly reversed.
    pub fn confirm_selection(&mut self) -> Result<ConfirmOutcome> {
        self.check_active()?;

        if self.selection.is_empty() {
            return Ok(ConfirmOutcome::NoSelection);
        }

        let matched = self
            .sorted_placements()
            .filter(|p| !self.found.contains(p.word()))
            .find(|p| path_matches(&self.selection, p.path()))
            .map(|p| String::from(p.word()));

        let Some(word) = matched else {
            return Ok(ConfirmOutcome::NoMatch);
        };

        self.found.insert(word.clone());
        self.selection.clear();

        Ok(if self.found.len() == self.layout.word_count() {
            self.state = SessionState::Won;
            ConfirmOutcome::Won(word)
        } else {
            ConfirmOutcome::Found(word)
        })
    }

    fn sorted_placements(&self) -> impl Iterator<Item = &WordPlacement> {
        let mut refs: Vec<&WordPlacement> = self.layout.placements().iter().collect();
        refs.sort_by(|a, b| a.word().cmp(b.word()));
        refs.into_iter()
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

fn path_matches(selection: &[Coord2], path: &[Coord2]) -> bool {
    selection == path || selection.iter().rev().eq(path.iter())
}

/// Fill-in-variant session: the player types letters into playable cells and
/// asks for a full-grid check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillGame {
    layout: PuzzleLayout,
    entries: Array2<u8>,
}

impl FillGame {
    pub fn new(layout: PuzzleLayout) -> Self {
        let entries = Array2::from_elem(layout.size().to_nd_index(), UNSET);
        Self { layout, entries }
    }

    pub fn layout(&self) -> &PuzzleLayout {
        &self.layout
    }

    pub fn entry_at(&self, coords: Coord2) -> Option<char> {
        let cell = self.entries[coords.to_nd_index()];
        (cell != UNSET).then(|| cell.into())
    }

    /// Writes one entry, normalized to a single uppercase letter (longer
    /// input is truncated to its first character). Filler cells and
    /// non-letter input are rejected; rewriting the same letter reports no
    /// change.
    pub fn set_letter(&mut self, coords: Coord2, input: &str) -> Result<EntryOutcome> {
        let coords = self.layout.validate_coords(coords)?;

        if !self.layout.is_playable(coords) {
            return Ok(EntryOutcome::Rejected);
        }
        let Some(letter) = normalize_entry(input) else {
            return Ok(EntryOutcome::Rejected);
        };

        let cell = &mut self.entries[coords.to_nd_index()];
        Ok(if *cell == letter {
            EntryOutcome::NoChange
        } else {
            *cell = letter;
            EntryOutcome::Set
        })
    }

    pub fn clear_entries(&mut self) {
        self.entries.fill(UNSET);
    }

    /// Overwrites every playable entry with its ground-truth letter.
    pub fn reveal_solution(&mut self) {
        let solved: Vec<(Coord2, u8)> = self
            .layout
            .iter_playable()
            .map(|coords| (coords, self.layout[coords]))
            .collect();
        for (coords, letter) in solved {
            self.entries[coords.to_nd_index()] = letter;
        }
    }

    /// Pure check: true iff every playable cell's entry equals the solution
    /// letter. Filler cells are never checked.
    pub fn verify(&self) -> bool {
        self.layout
            .iter_playable()
            .all(|coords| self.entries[coords.to_nd_index()] == self.layout[coords])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const PERDON_PATH: [Coord2; 6] = [(1, 9), (2, 8), (3, 7), (4, 6), (5, 5), (6, 4)];

    fn gift_layout() -> PuzzleLayout {
        PuzzleBuilder::new((12, 12))
            .word(WordSpec::new("PERDON", PERDON_PATH, "diagonal"))
            .word(WordSpec::new(
                "JAZMIN",
                [(0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1)],
                "vertical",
            ))
            .word(WordSpec::new(
                "TEAMO",
                [(9, 8), (9, 9), (9, 10), (10, 10), (11, 10)],
                "bent",
            ))
            .build(RandomGridFiller::new(99))
            .unwrap()
    }

    fn pick_all(game: &mut SelectGame, path: &[Coord2]) {
        for &coords in path {
            assert_eq!(game.pick(coords).unwrap(), PickOutcome::Picked);
        }
    }

    #[test]
    fn forward_selection_finds_the_word() {
        let mut game = SelectGame::new(gift_layout());

        pick_all(&mut game, &PERDON_PATH);
        assert_eq!(game.selected_text(), "PERDON");

        let outcome = game.confirm_selection().unwrap();
        assert_eq!(outcome, ConfirmOutcome::Found("PERDON".into()));
        assert!(game.selection().is_empty());
        assert_eq!(game.found_words().collect::<Vec<_>>(), vec!["PERDON"]);
    }

    #[test]
    fn reversed_selection_finds_the_word_too() {
        let mut game = SelectGame::new(gift_layout());

        let reversed: Vec<Coord2> = PERDON_PATH.iter().rev().copied().collect();
        pick_all(&mut game, &reversed);

        let outcome = game.confirm_selection().unwrap();
        assert_eq!(outcome, ConfirmOutcome::Found("PERDON".into()));
    }

    #[test]
    fn partial_selection_does_not_match_and_is_retained() {
        let mut game = SelectGame::new(gift_layout());

        pick_all(&mut game, &PERDON_PATH[..5]);
        let outcome = game.confirm_selection().unwrap();

        assert_eq!(outcome, ConfirmOutcome::NoMatch);
        assert_eq!(game.selection().len(), 5);
        assert_eq!(game.found_count(), 0);
    }

    #[test]
    fn confirm_with_empty_selection_is_a_hint_not_an_error() {
        let mut game = SelectGame::new(gift_layout());
        assert_eq!(
            game.confirm_selection().unwrap(),
            ConfirmOutcome::NoSelection
        );
    }

    #[test]
    fn duplicate_pick_is_a_no_op() {
        let mut game = SelectGame::new(gift_layout());

        assert_eq!(game.pick((1, 9)).unwrap(), PickOutcome::Picked);
        assert_eq!(game.pick((1, 9)).unwrap(), PickOutcome::AlreadySelected);
        assert_eq!(game.selection().len(), 1);
    }

    #[test]
    fn cells_of_found_words_are_locked() {
        let mut game = SelectGame::new(gift_layout());

        pick_all(&mut game, &PERDON_PATH);
        game.confirm_selection().unwrap();

        assert!(game.is_found_cell((1, 9)));
        assert_eq!(game.pick((1, 9)).unwrap(), PickOutcome::Locked);
    }

    #[test]
    fn undo_and_clear_return_to_empty_selection() {
        let mut game = SelectGame::new(gift_layout());

        pick_all(&mut game, &PERDON_PATH[..3]);
        assert_eq!(game.undo_last(), SelectionEdit::Changed);
        assert_eq!(game.selection().len(), 2);

        assert_eq!(game.clear_selection(), SelectionEdit::Changed);
        assert!(game.selection().is_empty());
        assert_eq!(game.clear_selection(), SelectionEdit::NoChange);
        assert_eq!(game.undo_last(), SelectionEdit::NoChange);
    }

    #[test]
    fn reconfirming_a_found_word_path_does_not_match_again() {
        let mut game = SelectGame::new(gift_layout());

        pick_all(&mut game, &PERDON_PATH);
        game.confirm_selection().unwrap();

        // same path again; the word is skipped now, so nothing matches
        for &coords in &PERDON_PATH {
            assert_eq!(game.pick(coords).unwrap(), PickOutcome::Locked);
        }
        assert_eq!(game.confirm_selection().unwrap(), ConfirmOutcome::NoSelection);
        assert_eq!(game.found_count(), 1);
    }

    #[test]
    fn last_word_wins_exactly_once_and_locks_the_session() {
        let mut game = SelectGame::new(gift_layout());
        let jazmin: Vec<Coord2> = (0..6).map(|r| (r, 1)).collect();
        let teamo = [(9, 8), (9, 9), (9, 10), (10, 10), (11, 10)];

        pick_all(&mut game, &jazmin);
        assert_eq!(
            game.confirm_selection().unwrap(),
            ConfirmOutcome::Found("JAZMIN".into())
        );
        pick_all(&mut game, &PERDON_PATH);
        assert_eq!(
            game.confirm_selection().unwrap(),
            ConfirmOutcome::Found("PERDON".into())
        );
        pick_all(&mut game, &teamo);
        assert_eq!(
            game.confirm_selection().unwrap(),
            ConfirmOutcome::Won("TEAMO".into())
        );

        assert_eq!(game.state(), SessionState::Won);
        assert_eq!(game.pick((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(game.confirm_selection(), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn win_never_triggers_on_a_strict_subset() {
        let mut game = SelectGame::new(gift_layout());

        pick_all(&mut game, &PERDON_PATH);
        let outcome = game.confirm_selection().unwrap();

        assert!(matches!(outcome, ConfirmOutcome::Found(_)));
        assert_eq!(game.state(), SessionState::Active);
    }

    #[test]
    fn out_of_bounds_pick_is_an_error() {
        let mut game = SelectGame::new(gift_layout());
        assert_eq!(game.pick((12, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn remaining_words_are_alphabetical_and_shrink() {
        let mut game = SelectGame::new(gift_layout());
        assert_eq!(
            game.remaining_words().collect::<Vec<_>>(),
            vec!["JAZMIN", "PERDON", "TEAMO"]
        );

        pick_all(&mut game, &PERDON_PATH);
        game.confirm_selection().unwrap();
        assert_eq!(
            game.remaining_words().collect::<Vec<_>>(),
            vec!["JAZMIN", "TEAMO"]
        );
    }

    #[test]
    fn select_game_state_serde_round_trips() {
        let mut game = SelectGame::new(gift_layout());
        pick_all(&mut game, &PERDON_PATH[..2]);

        let json = serde_json::to_string(&game).unwrap();
        let back: SelectGame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }

    #[test]
    fn reveal_solution_then_verify_always_passes() {
        let mut game = FillGame::new(gift_layout());

        assert!(!game.verify());
        game.reveal_solution();
        assert!(game.verify());
    }

    #[test]
    fn verify_checks_only_playable_cells() {
        let mut game = FillGame::new(gift_layout());
        game.reveal_solution();

        // a filler cell stays empty and must not break verification
        assert!(!game.layout().is_playable((0, 0)));
        assert_eq!(game.entry_at((0, 0)), None);
        assert!(game.verify());
    }

    #[test]
    fn one_wrong_letter_fails_verification() {
        let mut game = FillGame::new(gift_layout());
        game.reveal_solution();

        let wrong = if game.layout().letter_at((1, 9)) == 'X' { "Y" } else { "X" };
        assert_eq!(game.set_letter((1, 9), wrong).unwrap(), EntryOutcome::Set);
        assert!(!game.verify());
    }

    #[test]
    fn entries_are_normalized_and_filler_cells_rejected() {
        let mut game = FillGame::new(gift_layout());

        // multi-character input is truncated and case-folded
        let outcome = game.set_letter((1, 9), " perdón ").unwrap();
        assert_eq!(outcome, EntryOutcome::Set);
        assert!(outcome.has_update());
        assert_eq!(game.entry_at((1, 9)), Some('P'));
        assert_eq!(game.set_letter((1, 9), "P").unwrap(), EntryOutcome::NoChange);

        assert_eq!(game.set_letter((0, 0), "A").unwrap(), EntryOutcome::Rejected);
        assert_eq!(game.set_letter((1, 9), "7").unwrap(), EntryOutcome::Rejected);
        assert_eq!(game.set_letter((1, 9), "  ").unwrap(), EntryOutcome::Rejected);
        assert_eq!(game.set_letter((99, 0), "A"), Err(GameError::InvalidCoords));
    }

    #[test]
    fn clear_entries_resets_every_entry() {
        let mut game = FillGame::new(gift_layout());
        game.reveal_solution();

        game.clear_entries();
        assert!(game.layout().iter_playable().count() > 0);
        for coords in game.layout().iter_playable().collect::<Vec<_>>() {
            assert_eq!(game.entry_at(coords), None);
        }
        assert!(!game.verify());
    }
}
