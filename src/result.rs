//! Round and game result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// What happened to a single player within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player bet and drew this card.
    Drew(Card),
    /// The player could not cover the bet and sat the round out.
    Skipped,
}

/// Per-player record of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTurn {
    /// The player's id.
    pub player_id: u8,
    /// Whether the deck was rebuilt and reshuffled just before this turn.
    pub reshuffled: bool,
    /// The outcome of the turn.
    pub outcome: TurnOutcome,
}

/// The winner of a round and the card that won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundWinner {
    /// The winning player's id.
    pub player_id: u8,
    /// The highest-ranked card of the round.
    pub card: Card,
}

/// Result of a completed round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Per-player turns, in play order.
    pub turns: Vec<PlayerTurn>,
    /// Sum of all bets collected this round.
    pub pot: usize,
    /// The round winner, or `None` if every active player failed to bet.
    pub winner: Option<RoundWinner>,
}

/// Outcome of asking the game to play one round.
#[derive(Debug, Clone)]
pub enum RoundOutcome {
    /// The round was played to completion.
    Played(RoundResult),
    /// Fewer than two players could fund a bet; the game cannot continue.
    ///
    /// This is a normal termination signal, not an error.
    Halted,
}

/// A player's id and funds, as reported in the final standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player's id.
    pub player_id: u8,
    /// The player's remaining funds.
    pub funds: usize,
}

/// Final standings after a game run.
#[derive(Debug, Clone)]
pub struct FinalStandings {
    /// Every player's standing, in id order.
    pub players: Vec<PlayerStanding>,
    /// The player with the most funds (earliest id on ties), or `None` for
    /// a game with no players.
    pub winner: Option<PlayerStanding>,
}

/// Result of a full game run.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Results of the rounds that were played, in order.
    pub rounds: Vec<RoundResult>,
    /// Whether the run stopped early because too few players had funds.
    pub halted: bool,
    /// Final standings after the last round.
    pub standings: FinalStandings,
}
