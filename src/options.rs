//! Game configuration options.

use core::time::Duration;

use crate::card::INITIAL_HAND_SIZE;

/// Configuration options for a Crazy Eights game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use crazy_eights::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_opponent_delay(Duration::ZERO)
///     .with_auto_opponent(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Pause before the opponent acts. Purely cosmetic.
    pub opponent_delay: Duration,
    /// Extra pause before the opponent plays a wild card. Purely cosmetic.
    ///
    /// The eight and its declared suit reach the table together once this
    /// pause ends, so a renderer that wants the eight to land first should
    /// show the `CardPlayed` event before the `WildSuitChosen` one.
    pub wild_announce_delay: Duration,
    /// Whether player actions run the opponent's reply before returning.
    pub auto_opponent: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: INITIAL_HAND_SIZE,
            opponent_delay: Duration::from_millis(600),
            wild_announce_delay: Duration::from_millis(400),
            auto_opponent: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the pause before the opponent acts.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_opponent_delay(Duration::ZERO);
    /// assert_eq!(options.opponent_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Sets the extra pause before the opponent plays a wild card and names its suit.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_wild_announce_delay(Duration::from_millis(50));
    /// assert_eq!(options.wild_announce_delay, Duration::from_millis(50));
    /// ```
    #[must_use]
    pub const fn with_wild_announce_delay(mut self, delay: Duration) -> Self {
        self.wild_announce_delay = delay;
        self
    }

    /// Sets whether player actions run the opponent's reply automatically.
    ///
    /// When disabled, call [`Game::play_opponent_turn`](crate::Game::play_opponent_turn)
    /// whenever [`Game::opponent_turn_pending`](crate::Game::opponent_turn_pending) is set.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_opponent(false);
    /// assert!(!options.auto_opponent);
    /// ```
    #[must_use]
    pub const fn with_auto_opponent(mut self, auto: bool) -> Self {
        self.auto_opponent = auto;
        self
    }
}
