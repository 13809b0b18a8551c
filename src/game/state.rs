//! Game state types.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::deck::Deal;
use crate::hand::Hand;
use crate::rules::has_legal_play;

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// No session has been dealt yet.
    #[default]
    NotStarted,
    /// Players are taking turns.
    InProgress,
    /// The human played a wild card and must declare a suit.
    AwaitingWildSuit,
    /// A player emptied their hand.
    Finished,
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The human at the table.
    Human,
    /// The scripted opponent.
    Opponent,
}

impl Player {
    /// Returns the other participant.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Opponent,
            Self::Opponent => Self::Human,
        }
    }
}

/// A read-only copy of the table, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Current status.
    pub status: GameStatus,
    /// Whose turn it is.
    pub turn: Player,
    /// The winner, once the game is finished.
    pub winner: Option<Player>,
    /// The human's cards.
    pub player_hand: Vec<Card>,
    /// The opponent's cards.
    pub opponent_hand: Vec<Card>,
    /// The discard pile, oldest first.
    pub discard_pile: Vec<Card>,
    /// Undealt cards.
    pub stub: Vec<Card>,
    /// The declared wild suit, if any.
    pub wild_suit: Option<Suit>,
    /// Whether the human holds at least one legal card.
    pub player_can_play: bool,
}

impl GameSnapshot {
    /// Returns the top of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }
}

/// The authoritative table state, owned by [`Game`](super::Game).
#[derive(Debug, Clone)]
pub(super) struct Session {
    pub(super) stub: Vec<Card>,
    pub(super) player_hand: Hand,
    pub(super) opponent_hand: Hand,
    pub(super) discard: Vec<Card>,
    pub(super) wild_suit: Option<Suit>,
    pub(super) turn: Player,
    pub(super) status: GameStatus,
    pub(super) winner: Option<Player>,
    /// Set on entering an opponent turn, cleared when that turn is claimed.
    pub(super) opponent_scheduled: bool,
    /// Bumped on every deal; decisions taken in an older session are dropped.
    pub(super) generation: u64,
}

impl Session {
    pub(super) const fn new() -> Self {
        Self {
            stub: Vec::new(),
            player_hand: Hand::new(),
            opponent_hand: Hand::new(),
            discard: Vec::new(),
            wild_suit: None,
            turn: Player::Human,
            status: GameStatus::NotStarted,
            winner: None,
            opponent_scheduled: false,
            generation: 0,
        }
    }

    pub(super) fn from_deal(deal: Deal, generation: u64) -> Self {
        Self {
            stub: deal.stub,
            player_hand: deal.player_hand,
            opponent_hand: deal.opponent_hand,
            discard: alloc::vec![deal.starting_card],
            wild_suit: None,
            turn: Player::Human,
            status: GameStatus::InProgress,
            winner: None,
            opponent_scheduled: false,
            generation,
        }
    }

    pub(super) const fn hand(&self, player: Player) -> &Hand {
        match player {
            Player::Human => &self.player_hand,
            Player::Opponent => &self.opponent_hand,
        }
    }

    pub(super) const fn hand_mut(&mut self, player: Player) -> &mut Hand {
        match player {
            Player::Human => &mut self.player_hand,
            Player::Opponent => &mut self.opponent_hand,
        }
    }

    pub(super) fn top_card(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    pub(super) fn can_play(&self, player: Player) -> bool {
        self.top_card()
            .is_some_and(|top| has_legal_play(self.hand(player).cards(), &top, self.wild_suit))
    }

    /// Hands the turn to `player`, scheduling the opponent if it is now up.
    pub(super) fn pass_turn(&mut self, player: Player) {
        self.turn = player;
        self.opponent_scheduled =
            player == Player::Opponent && self.status == GameStatus::InProgress;
    }

    pub(super) fn finish(&mut self, winner: Player) {
        self.status = GameStatus::Finished;
        self.winner = Some(winner);
        self.opponent_scheduled = false;
    }

    pub(super) fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            turn: self.turn,
            winner: self.winner,
            player_hand: self.player_hand.cards().to_vec(),
            opponent_hand: self.opponent_hand.cards().to_vec(),
            discard_pile: self.discard.clone(),
            stub: self.stub.clone(),
            wild_suit: self.wild_suit,
            player_can_play: self.can_play(Player::Human),
        }
    }
}
