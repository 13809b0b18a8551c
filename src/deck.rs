//! Deck construction and the initial deal.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// Builds an ordered 52-card deck, one card per suit and rank.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns whether `cards` holds each of the 52 standard cards exactly once.
#[must_use]
pub fn is_standard_deck(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }

    let mut seen = [false; DECK_SIZE];
    for card in cards {
        // Ids are derived from suit and rank; anything else is forged.
        if *card != Card::new(card.suit, card.rank) {
            return false;
        }
        let slot = &mut seen[usize::from(card.id.0)];
        if *slot {
            return false;
        }
        *slot = true;
    }

    true
}

/// Builds a 52-card deck and shuffles it with the given RNG.
pub fn build_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = standard_deck();
    cards.shuffle(rng);
    cards
}

/// Cards handed out at the start of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// The human player's hand.
    pub player_hand: Hand,
    /// The opponent's hand.
    pub opponent_hand: Hand,
    /// The first card of the discard pile. Never wild.
    pub starting_card: Card,
    /// Undealt cards. Nothing draws from them.
    pub stub: Vec<Card>,
}

/// Deals `hand_size` cards to each player and flips a starting card.
///
/// Any card sequence is accepted here; [`Game`](crate::Game) only deals
/// decks that pass [`is_standard_deck`].
///
/// The human receives the first `hand_size` cards of `deck`, the opponent the
/// next `hand_size`. The starting card is the first non-wild card after that.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] if the deck is shorter than
/// `2 * hand_size + 1`, and [`DealError::NoStartingCard`] if every remaining
/// card is wild.
pub fn deal(mut deck: Vec<Card>, hand_size: usize) -> Result<Deal, DealError> {
    let needed = hand_size.saturating_mul(2).saturating_add(1);
    if deck.len() < needed {
        return Err(DealError::NotEnoughCards {
            hand_size,
            available: deck.len(),
        });
    }

    let mut rest = deck.split_off(hand_size);
    let player_hand = Hand::from_cards(deck);
    let mut stub = rest.split_off(hand_size);
    let opponent_hand = Hand::from_cards(rest);

    let start = stub
        .iter()
        .position(|c| !c.is_wild())
        .ok_or(DealError::NoStartingCard)?;
    let starting_card = stub.remove(start);

    Ok(Deal {
        player_hand,
        opponent_hand,
        starting_card,
        stub,
    })
}
