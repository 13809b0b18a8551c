use alloc::vec::Vec;

use crate::event::TurnEvent;
use crate::opponent::choose_move;

use super::{Game, GameStatus, Player};

impl Game {
    /// Plays the scheduled opponent turn.
    ///
    /// An opponent turn is scheduled each time the turn passes to the opponent
    /// while the game is in progress. This claims it, waits out the configured
    /// delay, then plays the opponent's chosen card or skips if it has none.
    /// Without a scheduled turn, including a second call for the same turn,
    /// nothing happens and an empty list is returned. If a new session is
    /// dealt while the pacer waits, the decision is dropped and the new
    /// session's opponent turn, if any, stays scheduled.
    ///
    /// A wild card is played and its suit declared in one step, after both
    /// the think delay and the announce delay have elapsed.
    ///
    /// With [`GameOptions::auto_opponent`](crate::GameOptions::auto_opponent)
    /// set, player actions call this themselves.
    pub fn play_opponent_turn(&self) -> Vec<TurnEvent> {
        let mut session = self.session.lock();
        if !session.opponent_scheduled {
            tracing::debug!("no opponent turn scheduled");
            return Vec::new();
        }
        session.opponent_scheduled = false;

        if session.status != GameStatus::InProgress || session.turn != Player::Opponent {
            return Vec::new();
        }
        let Some(top) = session.top_card() else {
            return Vec::new();
        };
        let choice = choose_move(session.opponent_hand.cards(), &top, session.wild_suit);
        let generation = session.generation;
        drop(session);

        tracing::trace!(?choice, ?top, generation, "opponent decided");
        self.pacer.pause(self.options.opponent_delay);

        // A restart during the pause bumps the generation and voids this decision.
        match choice {
            Some(card) => {
                if card.is_wild() {
                    self.pacer.pause(self.options.wild_announce_delay);
                }
                self.apply_play(Player::Opponent, card, Some(generation))
            }
            None => self.apply_skip(Player::Opponent, Some(generation)),
        }
    }
}
