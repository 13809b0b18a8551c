//! Error types for game operations.
//!
//! Dealing is the only fallible step. Illegal plays, out-of-turn actions and
//! unjustified skips are ignored by the game rather than reported as errors.

use thiserror::Error;

/// Errors that can occur while dealing a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot cover both hands plus a starting card.
    #[error("not enough cards to deal {hand_size} cards to each player and a starting card")]
    NotEnoughCards {
        /// Configured cards per hand.
        hand_size: usize,
        /// Cards available in the deck.
        available: usize,
    },
    /// The deck is not an ordering of the 52 standard cards.
    #[error("deck must hold each of the 52 standard cards exactly once")]
    InvalidDeck,
    /// No non-wild card is left to seed the discard pile.
    #[error("no non-wild card left to start the discard pile")]
    NoStartingCard,
}
