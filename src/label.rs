//! Labeler: assigns the 52-character `A..Z a..z` alphabet to cover
//! members, largest weight-to-cost ratio first; anything beyond the 52nd
//! member gets `'0'`.

use crate::arena::{RectArena, RectId};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// the label for the `i`-th (0-indexed) member in descending-ratio order
pub fn label_for_rank(i: usize) -> char {
    match ALPHABET.get(i) {
        Some(&b) => b as char,
        None => '0',
    }
}

/// Sorts `cover` descending by weight-to-cost ratio and pairs each member
/// with its assigned label.
pub fn label_cover(arena: &RectArena, cover: &[RectId]) -> Vec<(RectId, char)> {
    let mut sorted = cover.to_vec();
    sorted.sort_by(|&a, &b| arena.get(b).ratio().cmp(&arena.get(a).ratio()));
    sorted.into_iter().enumerate().map(|(i, id)| (id, label_for_rank(i))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Bounds;

    #[test]
    fn first_52_members_get_distinct_letters() {
        let mut arena = RectArena::new();
        let unit = Bounds { top_row: 0, top_col: 0, bottom_row: 0, bottom_col: 0 };
        let ids: Vec<RectId> = (0..60).map(|w| arena.alloc(unit, w)).collect();
        let labels = label_cover(&arena, &ids);
        let letters: Vec<char> = labels.iter().take(52).map(|&(_, c)| c).collect();
        let mut unique = letters.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 52);
        for &(_, c) in labels.iter().skip(52) {
            assert_eq!(c, '0');
        }
    }

    #[test]
    fn overflow_alphabet_maps_to_zero() {
        assert_eq!(label_for_rank(51), 'z');
        assert_eq!(label_for_rank(52), '0');
        assert_eq!(label_for_rank(1000), '0');
    }
}
