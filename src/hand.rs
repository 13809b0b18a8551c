//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId, Suit};

/// Cards held by one participant.
///
/// Order is the order cards were dealt in. It has no gameplay meaning but it
/// is the "natural order" the opponent scans when looking for a move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds a card with the given id.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Removes and returns the card with the given id.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Counts the non-wild cards of each suit, indexed like [`Suit::ALL`].
    #[must_use]
    pub fn suit_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for card in self.cards.iter().filter(|c| !c.is_wild()) {
            counts[card.suit.index()] += 1;
        }
        counts
    }

    /// Returns how many cards of the given suit the hand holds, wild cards excluded.
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.suit_counts()[suit.index()]
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
