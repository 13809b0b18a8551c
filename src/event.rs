//! Events reported by game transitions.

use crate::card::{Card, Suit};
use crate::game::Player;

/// Something that happened while applying an action.
///
/// Every mutating method of [`Game`](crate::Game) returns the events it caused
/// in order. An empty list means the request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// A new session was dealt.
    SessionStarted {
        /// The first card of the discard pile.
        starting_card: Card,
    },
    /// A card moved from a hand to the discard pile.
    CardPlayed {
        /// Who played it.
        player: Player,
        /// The card.
        card: Card,
    },
    /// The human played a wild card and must now declare a suit.
    WildSuitRequested,
    /// A wild suit was declared.
    WildSuitChosen {
        /// Who declared it.
        player: Player,
        /// The declared suit.
        suit: Suit,
    },
    /// A player had no legal card and passed.
    TurnSkipped {
        /// Who passed.
        player: Player,
    },
    /// A player emptied their hand.
    GameWon {
        /// The winner.
        winner: Player,
    },
}
