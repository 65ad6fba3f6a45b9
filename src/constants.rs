//! Game constants: card ranks, pile identifiers, capacities, and the
//! fixed source order the turn loop follows.
//!
//! Ranks are 0-indexed, so the face value of a card is rank + 1:
//! - rank 0 = Ace, rank 5 = the face-six card, rank 6 = the face-seven
//!   card, rank 12 = King.
//!
//! Pile identifiers are laid out so that the move resolver's
//! lowest-identifier tie-break visits destinations in the right order:
//! foundations first, then the spare-sixes overflow, then the general
//! spare slots. Discard and deck come last and never accept cards.

/// A card is just its rank; suits are irrelevant to this variant.
pub type Card = u8;

/// Number of distinct ranks (Ace through King).
pub const NUM_RANKS: usize = 13;

/// Copies of each rank in a deck (one per suit).
pub const COPIES_PER_RANK: usize = 4;

/// Total cards in a deck: 13 ranks x 4 copies.
pub const DECK_SIZE: usize = NUM_RANKS * COPIES_PER_RANK;

pub const RANK_ACE: Card = 0;
/// The face-six card — opens the foundation-low pile.
pub const RANK_SIX: Card = 5;
/// The face-seven card — opens a foundation-high pile.
pub const RANK_SEVEN: Card = 6;
pub const RANK_KING: Card = 12;

/// Number of piles on the tableau.
pub const NUM_PILES: usize = 12;

/// The four foundation-high piles, built up from rank 6 to King.
pub const FOUNDATION_HIGH: std::ops::Range<usize> = 0..4;
/// The single foundation-low pile, built down from rank 5 to Ace in
/// repeating runs.
pub const FOUNDATION_LOW: usize = 4;
/// Overflow pile for rank-5 cards waiting on the foundation-low pile.
pub const SPARE_SIXES: usize = 5;
/// The four single-card spare slots.
pub const SPARES: std::ops::Range<usize> = 6..10;
/// Discard pile, fed from the deck when nothing is playable.
pub const DISCARD: usize = 10;
/// The face-down deck.
pub const DECK: usize = 11;

/// Capacity of each spare slot.
pub const SPARE_CAPACITY: usize = 1;
/// Capacity of the spare-sixes overflow.
pub const SPARE_SIXES_CAPACITY: usize = 4;

/// Destination-pile bitmask covering the four general spare slots.
/// Reserve sources may not land here (no spare-to-spare feeding).
pub const SPARE_DEST_MASK: u16 = 0b0011_1100_0000;

/// Sources the turn loop tries each turn, in priority order: discard,
/// the spare slots, the spare-sixes overflow, then the deck itself.
pub const SOURCE_ORDER: [usize; 7] = [DISCARD, 6, 7, 8, 9, SPARE_SIXES, DECK];

/// Upper bound on transfers in one game. Cards only flow
/// deck -> discard -> spares -> spare-sixes -> foundations, so each of
/// the 52 cards moves at most 4 times.
pub const MAX_TRANSFERS: u32 = 4 * DECK_SIZE as u32;

pub const PILE_NAMES: [&str; NUM_PILES] = [
    "7s-a", "7s-b", "7s-c", "7s-d", "6s", "spare-6s", "s1", "s2", "s3", "s4", "discard", "deck",
];

/// What a pile is, fixed for the pile's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PileRole {
    FoundationHigh,
    FoundationLow,
    SpareSixes,
    Spare,
    Discard,
    Deck,
}

/// Role of a pile identifier.
#[inline(always)]
pub fn pile_role(id: usize) -> PileRole {
    match id {
        0..=3 => PileRole::FoundationHigh,
        FOUNDATION_LOW => PileRole::FoundationLow,
        SPARE_SIXES => PileRole::SpareSixes,
        6..=9 => PileRole::Spare,
        DISCARD => PileRole::Discard,
        DECK => PileRole::Deck,
        _ => unreachable!("pile id out of range: {id}"),
    }
}

/// Whether a source pile is one of the reserve holding piles (the four
/// spares or the spare-sixes overflow), whose cards may not feed back
/// into the spare slots.
#[inline(always)]
pub fn is_reserve_source(id: usize) -> bool {
    (SPARE_SIXES..SPARES.end).contains(&id)
}
