//! The scripted opponent.
//!
//! The policy is greedy and fixed: play the first legal plain card, hold
//! eights back until nothing else fits, and name the suit the opponent holds
//! the most of.

use crate::card::{Card, Suit};
use crate::hand::Hand;
use crate::rules::is_legal_play;

/// Picks the opponent's next card, or `None` if it has to skip.
///
/// Non-wild legal cards are preferred over wild ones. Within each group the
/// first card in hand order wins.
#[must_use]
pub fn choose_move(hand: &[Card], top: &Card, wild_suit: Option<Suit>) -> Option<Card> {
    hand.iter()
        .find(|c| !c.is_wild() && is_legal_play(c, top, wild_suit))
        .or_else(|| hand.iter().find(|c| c.is_wild()))
        .copied()
}

/// Picks the suit to declare after the opponent plays a wild card.
///
/// Returns the suit with the most non-wild cards in `hand`. Ties go to the
/// suit listed first in [`Suit::ALL`], so an empty hand yields hearts.
#[must_use]
pub fn choose_wild_suit(hand: &Hand) -> Suit {
    let counts = hand.suit_counts();
    let mut best = Suit::ALL[0];

    for suit in Suit::ALL {
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }

    best
}
