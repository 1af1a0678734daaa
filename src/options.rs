//! Game configuration options.

use crate::card::DECK_SIZE;

/// Configuration options for a high-card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hcrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_rounds(8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players seated at the start.
    pub players: u8,
    /// Number of rounds to play.
    ///
    /// Doubles as each player's starting funds, sized so a player who never
    /// wins can still bet once per round.
    pub rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 4,
            rounds: 10,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use hcrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(6);
    /// assert_eq!(options.players, 6);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use hcrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(13);
    /// assert_eq!(options.rounds, 13);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Returns the largest round count a single pass through the deck can
    /// serve, i.e. 52 divided by the player count.
    ///
    /// Returns 0 when `players` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use hcrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.max_rounds(), 13);
    /// ```
    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        if self.players == 0 {
            return 0;
        }
        DECK_SIZE as u32 / self.players as u32
    }

    /// Caps the configured rounds at [`Self::max_rounds`].
    ///
    /// # Example
    ///
    /// ```
    /// use hcrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4).with_rounds(100);
    /// assert_eq!(options.clamp_rounds().rounds, 13);
    /// ```
    #[must_use]
    pub const fn clamp_rounds(mut self) -> Self {
        let max = self.max_rounds();
        if self.rounds > max {
            self.rounds = max;
        }
        self
    }
}
