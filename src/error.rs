//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when building a card from textual symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit symbol outside the fixed four-suit set.
    #[error("invalid card suit: {value} (must be one of Hearts, Diamonds, Clubs, Spades)")]
    InvalidSuit {
        /// The rejected symbol.
        value: String,
    },
    /// Rank symbol outside the fixed thirteen-rank set.
    #[error(
        "invalid card rank: {value} (must be one of 2, 3, 4, 5, 6, 7, 8, 9, 10, Jack, Queen, King, Ace)"
    )]
    InvalidRank {
        /// The rejected symbol.
        value: String,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player has no funds left to cover the fixed bet.
    #[error("player {player} has no funds to bet")]
    InsufficientFunds {
        /// Id of the player whose bet was refused.
        player: u8,
    },
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    ///
    /// The round loop rebuilds the deck before every draw, so seeing this
    /// escape [`Game`](crate::Game) indicates a broken invariant rather than
    /// a recoverable condition.
    #[error("no cards left in the deck")]
    Empty,
}
