//! Play legality.

use crate::card::{Card, Suit};

/// Returns the suit a non-wild play has to match.
#[must_use]
pub fn target_suit(top: &Card, wild_suit: Option<Suit>) -> Suit {
    wild_suit.unwrap_or(top.suit)
}

/// Returns whether `card` may be played on `top`.
///
/// Wild cards are always playable. Any other card must match the target suit
/// (the declared wild suit if there is one, otherwise the top card's suit) or
/// the top card's rank.
///
/// # Example
///
/// ```
/// use crazy_eights::{Card, Rank, Suit, is_legal_play};
///
/// let top = Card::new(Suit::Hearts, Rank::Three);
/// let card = Card::new(Suit::Diamonds, Rank::Three);
/// assert!(is_legal_play(&card, &top, Some(Suit::Spades)));
/// ```
#[must_use]
pub fn is_legal_play(card: &Card, top: &Card, wild_suit: Option<Suit>) -> bool {
    if card.is_wild() {
        return true;
    }

    card.suit == target_suit(top, wild_suit) || card.rank == top.rank
}

/// Returns the cards of `hand` that may be played, in hand order.
pub fn legal_plays<'a>(
    hand: &'a [Card],
    top: &'a Card,
    wild_suit: Option<Suit>,
) -> impl Iterator<Item = &'a Card> + 'a {
    hand.iter()
        .filter(move |card| is_legal_play(card, top, wild_suit))
}

/// Returns whether any card of `hand` may be played.
#[must_use]
pub fn has_legal_play(hand: &[Card], top: &Card, wild_suit: Option<Suit>) -> bool {
    legal_plays(hand, top, wild_suit).next().is_some()
}
