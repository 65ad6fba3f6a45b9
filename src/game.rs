//! Single-game engine: the twelve-pile tableau, the move resolver, and
//! the turn loop that plays one shuffled deck to a verdict.
//!
//! All mutable game state lives in one owned [`TombGame`] aggregate so
//! that parallel trials can each hold an independent engine with no
//! shared state. Piles are addressed by the small integer identifiers in
//! [`crate::constants`]; the derived [`CandidateIndex`] is rebuilt from
//! the piles after every transfer.
//!
//! The strategy is the fixed greedy cascade of the rules themselves:
//! each turn try the discard pile, then the spare slots, then the
//! spare-sixes overflow, then the next deck card; when nothing plays,
//! turn a deck card onto the discard pile. There is no search and no
//! backtracking.

use rand::rngs::SmallRng;

use crate::candidate_index::CandidateIndex;
use crate::constants::{
    is_reserve_source, Card, COPIES_PER_RANK, DECK, DISCARD, FOUNDATION_HIGH, FOUNDATION_LOW,
    NUM_PILES, NUM_RANKS, RANK_SEVEN, RANK_SIX, SOURCE_ORDER, SPARES, SPARE_CAPACITY,
    SPARE_DEST_MASK, SPARE_SIXES, SPARE_SIXES_CAPACITY,
};
use crate::deck::shuffled_deck;

/// Terminal result of one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Won,
    Lost,
}

/// What a single turn did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A card was placed via the priority cascade.
    Moved,
    /// Nothing was playable; the top deck card went to the discard pile.
    DiscardFilled,
    /// The game reached a terminal state; no card moved.
    Finished(Verdict),
}

/// One game of Napoleon's Tomb: pile store, derived candidate index, and
/// a transfer counter for diagnostics.
#[derive(Clone, Debug)]
pub struct TombGame {
    piles: [Vec<Card>; NUM_PILES],
    index: CandidateIndex,
    transfers: u32,
}

impl TombGame {
    /// Fresh game from a shuffled deck drawn from the caller's RNG.
    pub fn new_shuffled(rng: &mut SmallRng) -> Self {
        Self::with_deck(shuffled_deck(rng))
    }

    /// Fresh game from an explicit deck given in draw order: `cards[0]`
    /// is the first card turned over. Used for replay and tests; the
    /// deck must be a full 52-card deck for the invariants to hold.
    pub fn from_draw_order(cards: &[Card]) -> Self {
        let mut deck: Vec<Card> = cards.to_vec();
        deck.reverse(); // deck pile is LIFO with the top at the end
        Self::with_deck(deck)
    }

    fn with_deck(deck: Vec<Card>) -> Self {
        let mut piles: [Vec<Card>; NUM_PILES] = std::array::from_fn(|_| Vec::new());
        piles[DECK] = deck;
        let index = CandidateIndex::rebuild(&piles);
        TombGame {
            piles,
            index,
            transfers: 0,
        }
    }

    /// Contents of a pile, bottom to top.
    pub fn pile(&self, id: usize) -> &[Card] {
        &self.piles[id]
    }

    /// Total transfers made so far (placements and discard fills).
    pub fn transfers(&self) -> u32 {
        self.transfers
    }

    /// Whether every reserve pile (spares, spare-sixes, discard, deck)
    /// is empty. By conservation this means all 52 cards sit on the
    /// foundations, i.e. the game is won.
    pub fn reserves_empty(&self) -> bool {
        (SPARE_SIXES..NUM_PILES).all(|id| self.piles[id].is_empty())
    }

    /// Try to place the top card of `source` somewhere legal.
    ///
    /// Destinations come from the candidate index, minus the source
    /// itself and, for reserve sources, minus the four spare slots
    /// (no spare-to-spare feeding). Among the survivors the lowest pile
    /// identifier wins; with the pile numbering in [`crate::constants`]
    /// that prefers foundations, then the spare-sixes overflow, then the
    /// spare slots. On failure the source pile is untouched.
    pub fn attempt_placement(&mut self, source: usize) -> bool {
        let Some(&card) = self.piles[source].last() else {
            return false;
        };
        let mut dests = self.index.piles_accepting(card) & !(1u16 << source);
        if is_reserve_source(source) {
            dests &= !SPARE_DEST_MASK;
        }
        if dests == 0 {
            return false;
        }
        self.transfer(source, dests.trailing_zeros() as usize);
        true
    }

    /// Play one turn: win check, then the priority cascade, then the
    /// discard fill or the loss.
    pub fn step(&mut self) -> StepOutcome {
        if self.reserves_empty() {
            return StepOutcome::Finished(Verdict::Won);
        }
        for &source in &SOURCE_ORDER {
            if self.attempt_placement(source) {
                return StepOutcome::Moved;
            }
        }
        if self.piles[DECK].is_empty() {
            return StepOutcome::Finished(Verdict::Lost);
        }
        self.transfer(DECK, DISCARD);
        StepOutcome::DiscardFilled
    }

    /// Run the turn loop to a verdict. Terminates within
    /// [`crate::constants::MAX_TRANSFERS`] transfers because cards only
    /// flow deck -> discard -> spares -> spare-sixes -> foundations.
    pub fn play(&mut self) -> Verdict {
        loop {
            if let StepOutcome::Finished(verdict) = self.step() {
                return verdict;
            }
        }
    }

    /// Move the top card of `source` onto `dest` and rederive the index.
    fn transfer(&mut self, source: usize, dest: usize) {
        let card = self.piles[source].pop().expect("transfer from empty pile");
        self.piles[dest].push(card);
        self.transfers += 1;
        self.index = CandidateIndex::rebuild(&self.piles);
        #[cfg(debug_assertions)]
        self.assert_invariants();
    }

    /// Panic if any structural invariant is broken. Runs after every
    /// transfer in debug builds; release play relies on these holding by
    /// construction. Tests call it directly.
    pub fn assert_invariants(&self) {
        let mut counts = [0usize; NUM_RANKS];
        for pile in &self.piles {
            for &card in pile {
                counts[card as usize] += 1;
            }
        }
        assert!(
            counts.iter().all(|&n| n == COPIES_PER_RANK),
            "rank conservation violated: {counts:?}"
        );

        for id in FOUNDATION_HIGH {
            let pile = &self.piles[id];
            for (i, &card) in pile.iter().enumerate() {
                assert_eq!(
                    card,
                    RANK_SEVEN + i as Card,
                    "foundation-high {id} not consecutive from rank 6: {pile:?}"
                );
            }
        }

        let low = &self.piles[FOUNDATION_LOW];
        for (i, &card) in low.iter().enumerate() {
            assert_eq!(
                card,
                RANK_SIX - (i % 6) as Card,
                "foundation-low broken at position {i}: {low:?}"
            );
        }

        for id in SPARES {
            assert!(
                self.piles[id].len() <= SPARE_CAPACITY,
                "spare {id} over capacity: {:?}",
                self.piles[id]
            );
        }
        let overflow = &self.piles[SPARE_SIXES];
        assert!(
            overflow.len() <= SPARE_SIXES_CAPACITY,
            "spare-sixes over capacity: {overflow:?}"
        );
        assert!(
            overflow.iter().all(|&card| card == RANK_SIX),
            "spare-sixes holds a non-rank-5 card: {overflow:?}"
        );
    }
}
