//! Player identity and bankroll state.

use crate::error::BetError;

/// Fixed bet size placed by every player each round.
pub const BET_AMOUNT: usize = 1;

/// A player, identified by id and tracking a fund balance.
///
/// Funds are unsigned, so a balance can never go negative; a bet is refused
/// instead once the funds run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Unique positive id, assigned in joining order.
    id: u8,
    /// Remaining funds.
    funds: usize,
}

impl Player {
    /// Creates a player with the given id and starting funds.
    #[must_use]
    pub const fn new(id: u8, funds: usize) -> Self {
        Self { id, funds }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's remaining funds.
    #[must_use]
    pub const fn funds(&self) -> usize {
        self.funds
    }

    /// Places the fixed bet, deducting [`BET_AMOUNT`] from the funds, and
    /// returns the amount bet.
    ///
    /// # Errors
    ///
    /// Returns an error naming the player when the funds cannot cover the
    /// bet.
    pub const fn bet(&mut self) -> Result<usize, BetError> {
        if self.funds < BET_AMOUNT {
            return Err(BetError::InsufficientFunds { player: self.id });
        }

        self.funds -= BET_AMOUNT;
        Ok(BET_AMOUNT)
    }

    /// Credits winnings to the player's funds.
    pub const fn receive_winnings(&mut self, amount: usize) {
        self.funds += amount;
    }
}
