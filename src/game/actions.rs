use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::event::TurnEvent;
use crate::opponent;
use crate::rules::{has_legal_play, is_legal_play};

use super::state::Session;
use super::{Game, GameStatus, Player};

impl Session {
    /// Checks that `player` may act now, logging why not otherwise.
    ///
    /// `generation` pins the action to the session it was decided in.
    fn ensure_turn(&self, player: Player, action: &'static str, generation: Option<u64>) -> bool {
        if generation.is_some_and(|g| g != self.generation) {
            tracing::debug!(?player, action, "ignored: decided in an earlier session");
            return false;
        }

        if self.status != GameStatus::InProgress {
            tracing::debug!(?player, status = ?self.status, action, "ignored: game not in progress");
            return false;
        }

        if self.turn != player {
            tracing::debug!(?player, action, "ignored: not this player's turn");
            return false;
        }

        true
    }
}

impl Game {
    /// Plays `card` from `player`'s hand.
    ///
    /// The play is ignored (an empty list is returned) unless it is the
    /// player's turn, the game is in progress, the card is in their hand and
    /// it is legal on the current discard top.
    ///
    /// Emptying the hand ends the game immediately, even on a wild card. A
    /// wild card from the human leaves the game waiting for
    /// [`Game::choose_wild_suit`]; the opponent names its suit at once.
    ///
    /// With [`GameOptions::auto_opponent`](crate::GameOptions::auto_opponent)
    /// set, the opponent's reply is played before returning and its events
    /// are appended.
    pub fn play_card(&self, player: Player, card: Card) -> Vec<TurnEvent> {
        let events = self.apply_play(player, card, None);
        self.then_opponent(events)
    }

    /// Declares the wild suit after the human played a wild card.
    ///
    /// Ignored unless the game is waiting for a suit. Hands the turn to the
    /// opponent.
    pub fn choose_wild_suit(&self, suit: Suit) -> Vec<TurnEvent> {
        let mut session = self.session.lock();
        if session.status != GameStatus::AwaitingWildSuit {
            tracing::debug!(?suit, status = ?session.status, "ignored wild suit: no suit requested");
            return Vec::new();
        }

        session.wild_suit = Some(suit);
        session.status = GameStatus::InProgress;
        let mut events = alloc::vec![TurnEvent::WildSuitChosen {
            player: Player::Human,
            suit,
        }];
        tracing::debug!(?suit, "human declared wild suit");

        if session.player_hand.is_empty() {
            session.finish(Player::Human);
            events.push(TurnEvent::GameWon {
                winner: Player::Human,
            });
            tracing::info!(winner = ?Player::Human, "game won");
        } else {
            session.pass_turn(Player::Opponent);
        }
        drop(session);

        self.then_opponent(events)
    }

    /// Passes `player`'s turn.
    ///
    /// Only honored when the player holds no legal card; otherwise ignored.
    pub fn skip_turn(&self, player: Player) -> Vec<TurnEvent> {
        let events = self.apply_skip(player, None);
        self.then_opponent(events)
    }

    pub(super) fn apply_play(
        &self,
        player: Player,
        card: Card,
        generation: Option<u64>,
    ) -> Vec<TurnEvent> {
        let mut session = self.session.lock();
        if !session.ensure_turn(player, "play", generation) {
            return Vec::new();
        }

        let Some(top) = session.top_card() else {
            return Vec::new();
        };

        let Some(held) = session
            .hand(player)
            .cards()
            .iter()
            .find(|c| c.id == card.id)
            .copied()
        else {
            tracing::debug!(?player, ?card, "ignored play: card not in hand");
            return Vec::new();
        };

        if !is_legal_play(&held, &top, session.wild_suit) {
            tracing::debug!(?player, card = ?held, ?top, wild_suit = ?session.wild_suit, "ignored play: illegal card");
            return Vec::new();
        }

        let Some(card) = session.hand_mut(player).remove(held.id) else {
            return Vec::new();
        };
        session.discard.push(card);
        session.wild_suit = None;
        tracing::debug!(?player, ?card, "card played");

        let mut events = alloc::vec![TurnEvent::CardPlayed { player, card }];

        if session.hand(player).is_empty() {
            session.finish(player);
            events.push(TurnEvent::GameWon { winner: player });
            tracing::info!(winner = ?player, "game won");
            return events;
        }

        if !card.is_wild() {
            session.pass_turn(player.other());
            return events;
        }

        match player {
            Player::Human => {
                session.status = GameStatus::AwaitingWildSuit;
                events.push(TurnEvent::WildSuitRequested);
            }
            Player::Opponent => {
                let suit = opponent::choose_wild_suit(&session.opponent_hand);
                session.wild_suit = Some(suit);
                events.push(TurnEvent::WildSuitChosen { player, suit });
                tracing::debug!(?suit, "opponent declared wild suit");
                session.pass_turn(Player::Human);
            }
        }

        events
    }

    pub(super) fn apply_skip(&self, player: Player, generation: Option<u64>) -> Vec<TurnEvent> {
        let mut session = self.session.lock();
        if !session.ensure_turn(player, "skip", generation) {
            return Vec::new();
        }

        let Some(top) = session.top_card() else {
            return Vec::new();
        };

        if has_legal_play(session.hand(player).cards(), &top, session.wild_suit) {
            tracing::debug!(?player, "ignored skip: a legal card is available");
            return Vec::new();
        }

        session.pass_turn(player.other());
        tracing::debug!(?player, "turn skipped");

        alloc::vec![TurnEvent::TurnSkipped { player }]
    }

    /// Appends the scheduled opponent turn when auto-play is enabled.
    fn then_opponent(&self, mut events: Vec<TurnEvent>) -> Vec<TurnEvent> {
        if self.options.auto_opponent && self.opponent_turn_pending() {
            events.extend(self.play_opponent_turn());
        }
        events
    }
}
