use sopita_core::{Coord2, WordSpec};

pub(crate) const GRID_SIZE: Coord2 = (12, 12);

/// The hand-authored puzzle content: three words, their paths, their clues.
/// Data, not logic; changing the gift means changing only this file.
pub(crate) fn target_words() -> Vec<WordSpec> {
    vec![
        WordSpec::new(
            "JAZMIN",
            [(0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1)],
            "Vertical: tu nombre.",
        ),
        WordSpec::new(
            "PERDON",
            [(1, 9), (2, 8), (3, 7), (4, 6), (5, 5), (6, 4)],
            "Diagonal: lo que digo sin excusas.",
        ),
        WordSpec::new(
            "TEAMO",
            [(9, 8), (9, 9), (9, 10), (10, 10), (11, 10)],
            "Forma rara: lo que siento, aunque me equivoqué.",
        ),
    ]
}

/// Shown once, when the last word is found.
pub(crate) const WIN_MESSAGE: [&str; 3] = ["Jazmín…", "Perdón.", "Te amo."];
