//! Game engine and session management.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, Suit};
use crate::deck::{build_shuffled_deck, deal, is_standard_deck};
use crate::error::DealError;
use crate::event::TurnEvent;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pace::{NoPause, Pacer};
use crate::rules::is_legal_play;

mod actions;
mod autoplay;
pub mod state;

use state::Session;
pub use state::{GameSnapshot, GameStatus, Player};

/// A Crazy Eights table: one human, one scripted opponent.
///
/// The game owns the session and is its only writer. Every method takes
/// `&self`; the session sits behind a single lock that is never held while
/// the [`Pacer`] waits.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current session.
    session: Mutex<Session>,
    /// Random number generator used for shuffling.
    rng: Mutex<ChaCha8Rng>,
    /// Cosmetic delay around opponent actions.
    pacer: Box<dyn Pacer>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No cards are dealt until [`Game::start`] is called. The same seed
    /// produces the same sequence of deals.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::{Game, GameOptions, GameStatus};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.status(), GameStatus::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            session: Mutex::new(Session::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            pacer: Box::new(NoPause),
        }
    }

    /// Replaces the pacer used for the opponent's cosmetic delays.
    #[must_use]
    pub fn with_pacer<P: Pacer + 'static>(mut self, pacer: P) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Shuffles a fresh deck and deals a new session.
    ///
    /// Any previous session is discarded, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hand size leaves no starting card.
    pub fn start(&self) -> Result<Vec<TurnEvent>, DealError> {
        let deck = build_shuffled_deck(&mut *self.rng.lock());
        self.start_with_deck(deck)
    }

    /// Deals a new session from `deck` in the given order.
    ///
    /// `deck` must hold each of the 52 standard cards exactly once. The human
    /// receives the first cards, then the opponent, then the first non-wild
    /// card of the remainder starts the discard pile. On error the current
    /// session is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDeck`] if `deck` is not an ordering of the
    /// standard deck, [`DealError::NotEnoughCards`] if the configured hand
    /// size leaves no starting card, and [`DealError::NoStartingCard`] if only
    /// eights remain after the hands.
    pub fn start_with_deck(&self, deck: Vec<Card>) -> Result<Vec<TurnEvent>, DealError> {
        if !is_standard_deck(&deck) {
            return Err(DealError::InvalidDeck);
        }
        let dealt = deal(deck, self.options.hand_size)?;
        let starting_card = dealt.starting_card;

        let mut session = self.session.lock();
        let generation = session.generation.wrapping_add(1);
        *session = Session::from_deal(dealt, generation);
        drop(session);
        tracing::info!(
            hand_size = self.options.hand_size,
            ?starting_card,
            "session started"
        );

        Ok(alloc::vec![TurnEvent::SessionStarted { starting_card }])
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.session.lock().status
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Player {
        self.session.lock().turn
    }

    /// Returns the winner, if the game is finished.
    pub fn winner(&self) -> Option<Player> {
        self.session.lock().winner
    }

    /// Returns the declared wild suit, if any.
    pub fn wild_suit(&self) -> Option<Suit> {
        self.session.lock().wild_suit
    }

    /// Returns the top of the discard pile.
    ///
    /// Returns `None` before the first session is dealt.
    pub fn top_card(&self) -> Option<Card> {
        self.session.lock().top_card()
    }

    /// Returns a copy of a player's hand.
    pub fn hand(&self, player: Player) -> Hand {
        self.session.lock().hand(player).clone()
    }

    /// Returns the number of undealt cards.
    pub fn cards_remaining(&self) -> usize {
        self.session.lock().stub.len()
    }

    /// Returns whether the human could play `card` right now.
    ///
    /// Checks status, turn, ownership and legality, the same conditions
    /// [`Game::play_card`] applies. The card is looked up in the hand by id
    /// and the held card is the one checked.
    pub fn is_playable(&self, card: &Card) -> bool {
        let session = self.session.lock();
        if session.status != GameStatus::InProgress || session.turn != Player::Human {
            return false;
        }

        let held = session.player_hand.cards().iter().find(|c| c.id == card.id);
        match (held, session.top_card()) {
            (Some(held), Some(top)) => is_legal_play(held, &top, session.wild_suit),
            _ => false,
        }
    }

    /// Returns whether an opponent turn is waiting to be played.
    pub fn opponent_turn_pending(&self) -> bool {
        self.session.lock().opponent_scheduled
    }

    /// Returns a read-only copy of the table.
    pub fn snapshot(&self) -> GameSnapshot {
        self.session.lock().snapshot()
    }
}
