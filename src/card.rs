//! Card types and deck constants.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in enumeration order.
    ///
    /// This order is also the tie-break order when the opponent picks a wild suit.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight, the wild rank.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the short label printed on the card face ("A", "2".."10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns whether this is the wild rank.
    #[must_use]
    pub fn is_wild(self) -> bool {
        self == WILD_RANK
    }
}

/// The rank that is always playable and lets its player declare a suit.
pub const WILD_RANK: Rank = Rank::Eight;

/// Identifier distinguishing the cards of a deck for UI tracking.
///
/// Ids carry no gameplay meaning. Within one 52-card deck every card has a
/// distinct id in `0..52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u8);

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// The card's identifier.
    pub id: CardId,
}

impl Card {
    /// Creates a new card.
    ///
    /// The id is derived from the suit and rank, so two cards built from the
    /// same pair compare equal.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        let id = suit.index() * Rank::ALL.len() + rank.index();
        Self {
            suit,
            rank,
            id: CardId(id as u8),
        }
    }

    /// Returns whether the card has the wild rank.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Default number of cards dealt to each player.
pub const INITIAL_HAND_SIZE: usize = 7;
