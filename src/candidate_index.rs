//! Candidate index: which piles accept which rank right now.
//!
//! The index is a pure function of pile state, rebuilt in full after
//! every transfer and never patched incrementally.
//!
//! Acceptance per role:
//! - foundation-high: rank 6 when empty, else top+1, nothing once the
//!   King is placed
//! - foundation-low: rank 5 when empty or topped by the Ace, else top-1
//! - spare-sixes overflow: rank 5 while below capacity
//! - spare slot: every rank when empty, nothing when occupied
//! - discard, deck: nothing (source-only piles)

use crate::constants::{
    pile_role, Card, PileRole, NUM_PILES, NUM_RANKS, RANK_ACE, RANK_KING, RANK_SIX, RANK_SEVEN,
    SPARE_SIXES_CAPACITY,
};

/// Accepting piles per rank, as a pile-id bitmask (12 live bits). Bit i
/// set in `accepts[r]` means pile i takes a card of rank r right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateIndex {
    accepts: [u16; NUM_RANKS],
}

impl CandidateIndex {
    /// Derive the index from the current pile contents.
    pub fn rebuild(piles: &[Vec<Card>; NUM_PILES]) -> Self {
        let mut accepts = [0u16; NUM_RANKS];
        for (id, pile) in piles.iter().enumerate() {
            let bit = 1u16 << id;
            match pile_role(id) {
                PileRole::FoundationHigh => match pile.last() {
                    None => accepts[RANK_SEVEN as usize] |= bit,
                    Some(&top) if top < RANK_KING => accepts[top as usize + 1] |= bit,
                    Some(_) => {} // closed at the King
                },
                PileRole::FoundationLow => match pile.last() {
                    None | Some(&RANK_ACE) => accepts[RANK_SIX as usize] |= bit,
                    Some(&top) => accepts[top as usize - 1] |= bit,
                },
                PileRole::SpareSixes => {
                    if pile.len() < SPARE_SIXES_CAPACITY {
                        accepts[RANK_SIX as usize] |= bit;
                    }
                }
                PileRole::Spare => {
                    if pile.is_empty() {
                        for ranks in accepts.iter_mut() {
                            *ranks |= bit;
                        }
                    }
                }
                PileRole::Discard | PileRole::Deck => {}
            }
        }
        CandidateIndex { accepts }
    }

    /// Bitmask of piles currently willing to take a card of this rank.
    #[inline(always)]
    pub fn piles_accepting(&self, card: Card) -> u16 {
        self.accepts[card as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DECK, DISCARD, FOUNDATION_LOW, SPARES, SPARE_SIXES};

    fn empty_piles() -> [Vec<Card>; NUM_PILES] {
        std::array::from_fn(|_| Vec::new())
    }

    fn accepting_ids(index: &CandidateIndex, rank: Card) -> Vec<usize> {
        (0..NUM_PILES)
            .filter(|&id| index.piles_accepting(rank) & (1 << id) != 0)
            .collect()
    }

    #[test]
    fn test_empty_tableau_acceptance() {
        let piles = empty_piles();
        let index = CandidateIndex::rebuild(&piles);

        // Rank 6 opens any foundation-high pile; rank 5 opens the
        // foundation-low pile and fits the overflow; everything lands in
        // an empty spare.
        assert_eq!(accepting_ids(&index, RANK_SEVEN), vec![0, 1, 2, 3, 6, 7, 8, 9]);
        assert_eq!(
            accepting_ids(&index, RANK_SIX),
            vec![FOUNDATION_LOW, SPARE_SIXES, 6, 7, 8, 9]
        );
        assert_eq!(accepting_ids(&index, RANK_ACE), vec![6, 7, 8, 9]);
        assert_eq!(accepting_ids(&index, RANK_KING), vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_foundation_high_growth_and_closure() {
        let mut piles = empty_piles();
        piles[0] = vec![6, 7, 8];
        piles[1] = (6..=12).collect(); // full run, closed
        let index = CandidateIndex::rebuild(&piles);

        assert_eq!(accepting_ids(&index, 9), vec![0, 6, 7, 8, 9]);
        assert_eq!(accepting_ids(&index, RANK_SEVEN), vec![2, 3, 6, 7, 8, 9]);
        // Nothing goes on a closed pile, not even another King.
        assert!(!accepting_ids(&index, RANK_KING).contains(&1));
    }

    #[test]
    fn test_foundation_low_descends_and_wraps() {
        let mut piles = empty_piles();
        piles[FOUNDATION_LOW] = vec![5, 4, 3];
        let index = CandidateIndex::rebuild(&piles);
        assert!(accepting_ids(&index, 2).contains(&FOUNDATION_LOW));
        assert!(!accepting_ids(&index, RANK_SIX).contains(&FOUNDATION_LOW));

        // Once the run reaches the Ace, the pile wants a rank 5 again.
        piles[FOUNDATION_LOW] = vec![5, 4, 3, 2, 1, 0];
        let index = CandidateIndex::rebuild(&piles);
        assert!(accepting_ids(&index, RANK_SIX).contains(&FOUNDATION_LOW));
    }

    #[test]
    fn test_occupied_spare_accepts_nothing() {
        let mut piles = empty_piles();
        piles[SPARES.start] = vec![RANK_KING];
        let index = CandidateIndex::rebuild(&piles);
        for rank in 0..NUM_RANKS as Card {
            assert!(!accepting_ids(&index, rank).contains(&SPARES.start));
        }
    }

    #[test]
    fn test_spare_sixes_capacity() {
        let mut piles = empty_piles();
        piles[SPARE_SIXES] = vec![RANK_SIX; SPARE_SIXES_CAPACITY - 1];
        let index = CandidateIndex::rebuild(&piles);
        assert!(accepting_ids(&index, RANK_SIX).contains(&SPARE_SIXES));

        piles[SPARE_SIXES].push(RANK_SIX);
        let index = CandidateIndex::rebuild(&piles);
        assert!(!accepting_ids(&index, RANK_SIX).contains(&SPARE_SIXES));
    }

    #[test]
    fn test_discard_and_deck_never_accept() {
        let piles = empty_piles();
        let index = CandidateIndex::rebuild(&piles);
        for rank in 0..NUM_RANKS as Card {
            let ids = accepting_ids(&index, rank);
            assert!(!ids.contains(&DISCARD));
            assert!(!ids.contains(&DECK));
        }
    }
}
