//! Game engine and round flow.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::Player;

mod round;

/// A high-card game engine that owns the players, the deck, and the round
/// loop.
///
/// The game exclusively owns its state for the duration of a run. Rounds
/// are driven one at a time through [`Game::play_round`] or all at once with
/// [`Game::start_game`].
pub struct Game {
    /// Players in joining order; ids follow this order, starting at 1.
    pub players: Vec<Player>,
    /// The deck cards are drawn from.
    pub deck: Deck,
    /// Number of rounds configured for the run.
    rounds: u32,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Players are numbered from 1 in joining order, each starting with
    /// funds equal to the configured round count. The deck is built and
    /// shuffled once up front.
    ///
    /// # Example
    ///
    /// ```
    /// use hcrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default().with_players(2).with_rounds(5);
    /// let game = Game::new(options, 42);
    /// assert_eq!(game.player_count(), 2);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let players = (1..=options.players)
            .map(|id| Player::new(id, options.rounds as usize))
            .collect();

        Self {
            players,
            deck,
            rounds: options.rounds,
            rng,
        }
    }

    /// Returns the number of players, funded or not.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the configured round count.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }
}
