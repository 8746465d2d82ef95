/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for cell totals and playable-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Grid cells hold ASCII uppercase letters; `UNSET` only exists mid-build
/// and in empty entry-grid cells.
pub(crate) const UNSET: u8 = 0;

/// Folds a single character to the grid alphabet, rejecting anything that is
/// not an ASCII letter.
pub fn fold_letter(ch: char) -> Option<u8> {
    ch.is_ascii_alphabetic()
        .then(|| ch.to_ascii_uppercase() as u8)
}

/// Normalizes free-form text input to a single grid letter: trims, truncates
/// to the first character, and case-folds. `None` when nothing usable remains.
pub fn normalize_entry(input: &str) -> Option<u8> {
    input.trim().chars().next().and_then(fold_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_letter_uppercases_and_rejects_non_letters() {
        assert_eq!(fold_letter('a'), Some(b'A'));
        assert_eq!(fold_letter('Z'), Some(b'Z'));
        assert_eq!(fold_letter('3'), None);
        assert_eq!(fold_letter('ñ'), None);
    }

    #[test]
    fn normalize_entry_trims_and_truncates() {
        assert_eq!(normalize_entry("  jazmin "), Some(b'J'));
        assert_eq!(normalize_entry("P"), Some(b'P'));
        assert_eq!(normalize_entry("   "), None);
        assert_eq!(normalize_entry("42"), None);
    }
}
