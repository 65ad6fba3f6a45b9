//! # Napoleon's Tomb — Monte Carlo win-rate estimator
//!
//! Simulates games of the Napoleon's Tomb solitaire variant under random
//! shuffles to estimate the probability of winning. The engine plays the
//! fixed greedy strategy the rules prescribe (no search, no
//! backtracking); the win rate is estimated by repeated independent
//! trials.
//!
//! ## Game rules
//!
//! Suits are irrelevant; a card is its rank (0 = Ace .. 12 = King).
//! Cards are turned over one at a time onto a tableau of twelve piles:
//!
//! | pile | count | growth |
//! |------|-------|--------|
//! | foundation-high ("7s") | 4 | up from rank 6 to the King |
//! | foundation-low ("6s")  | 1 | down from rank 5 to the Ace, four times over |
//! | spare-sixes overflow   | 1 | rank-5 cards waiting on the foundation-low pile, capacity 4 |
//! | spare slot             | 4 | any one card awaiting a home |
//! | discard                | 1 | fed from the deck when nothing plays; replayed last-in-first-out |
//! | deck                   | 1 | the shuffled stock |
//!
//! The game is won when deck, discard, spares and overflow are all
//! empty — every card has then reached a foundation.
//!
//! ## Modules
//!
//! | module | role |
//! |--------|------|
//! | [`constants`] | ranks, pile identifiers and roles, capacities, source order |
//! | [`deck`] | deck construction and seeded shuffling |
//! | [`candidate_index`] | derived rank -> accepting-piles view, rebuilt per move |
//! | [`game`] | the engine: pile store, move resolver, turn loop |
//! | [`simulation`] | parallel trial batches and statistics aggregation |
//! | [`env_config`] | environment-driven thread-pool setup |

pub mod candidate_index;
pub mod constants;
pub mod deck;
pub mod env_config;
pub mod game;
pub mod simulation;
