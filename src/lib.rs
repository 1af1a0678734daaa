//! A high-card betting game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! every funded player antes a fixed bet and draws one card, and the highest
//! rank takes the pot. The game repeats for a configured number of rounds,
//! rebuilding the deck whenever it runs out, and reports final standings by
//! remaining funds.
//!
//! # Example
//!
//! ```
//! use hcrs::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_players(4).with_rounds(5);
//! let mut game = Game::new(options, 42);
//!
//! let result = game.start_game();
//! assert_eq!(result.rounds.len(), 5);
//! assert!(result.standings.winner.is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{BetError, CardError, DrawError};
pub use game::Game;
pub use options::GameOptions;
pub use player::{BET_AMOUNT, Player};
pub use result::{
    FinalStandings, GameResult, PlayerStanding, PlayerTurn, RoundOutcome, RoundResult, RoundWinner,
    TurnOutcome,
};
