use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::result::{
    FinalStandings, GameResult, PlayerStanding, PlayerTurn, RoundOutcome, RoundResult,
    RoundWinner, TurnOutcome,
};

use super::Game;

impl Game {
    /// Plays a single round.
    ///
    /// Active players (funds above zero) bet and draw one card each, in id
    /// order; the highest rank takes the whole pot. Ties keep the earlier
    /// player. The deck is rebuilt and reshuffled whenever it runs out
    /// mid-round, so every draw has a card available.
    ///
    /// Returns [`RoundOutcome::Halted`] without touching any state when
    /// fewer than two players can fund a bet.
    pub fn play_round(&mut self) -> RoundOutcome {
        let active: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.funds() > 0)
            .map(|(index, _)| index)
            .collect();

        if active.len() < 2 {
            return RoundOutcome::Halted;
        }

        let mut bets: HashMap<u8, usize> = HashMap::new();
        let mut turns = Vec::with_capacity(active.len());
        let mut best: Option<(usize, Card)> = None;

        for index in active {
            let reshuffled = self.deck.is_empty();
            if reshuffled {
                self.deck.build();
                self.deck.shuffle(&mut self.rng);
            }

            let player = &mut self.players[index];
            let player_id = player.id();

            // The active subset was selected on funds, so a refused bet can
            // only mean the invariant broke upstream; skip the player and
            // keep the round going.
            let Ok(amount) = player.bet() else {
                turns.push(PlayerTurn {
                    player_id,
                    reshuffled,
                    outcome: TurnOutcome::Skipped,
                });
                continue;
            };
            bets.insert(player_id, amount);

            let Ok(card) = self.deck.draw() else {
                unreachable!("deck is rebuilt before every draw")
            };
            turns.push(PlayerTurn {
                player_id,
                reshuffled,
                outcome: TurnOutcome::Drew(card),
            });

            // Strict comparison keeps the earlier player on rank ties.
            if best.is_none_or(|(_, best_card)| card.rank_value() > best_card.rank_value()) {
                best = Some((index, card));
            }
        }

        let pot: usize = bets.values().sum();
        let winner = best.map(|(index, card)| {
            self.players[index].receive_winnings(pot);
            RoundWinner {
                player_id: self.players[index].id(),
                card,
            }
        });

        RoundOutcome::Played(RoundResult { turns, pot, winner })
    }

    /// Plays up to the configured number of rounds, stopping at the first
    /// halted round, and reports the final standings.
    ///
    /// # Example
    ///
    /// ```
    /// use hcrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default().with_players(2).with_rounds(5);
    /// let mut game = Game::new(options, 42);
    ///
    /// let result = game.start_game();
    /// assert_eq!(result.rounds.len(), 5);
    /// assert!(!result.halted);
    /// ```
    pub fn start_game(&mut self) -> GameResult {
        let mut rounds = Vec::new();
        let mut halted = false;

        for _ in 0..self.rounds {
            match self.play_round() {
                RoundOutcome::Played(result) => rounds.push(result),
                RoundOutcome::Halted => {
                    halted = true;
                    break;
                }
            }
        }

        GameResult {
            rounds,
            halted,
            standings: self.final_standings(),
        }
    }

    /// Reports every player's funds and the overall winner.
    ///
    /// The winner is the player with the most funds; on ties the earliest
    /// player (lowest id) wins. Pure reporting, no state mutation.
    #[must_use]
    pub fn final_standings(&self) -> FinalStandings {
        let players: Vec<PlayerStanding> = self
            .players
            .iter()
            .map(|player| PlayerStanding {
                player_id: player.id(),
                funds: player.funds(),
            })
            .collect();

        // Strict comparison keeps the earliest player on fund ties.
        let mut winner: Option<PlayerStanding> = None;
        for &standing in &players {
            if winner.is_none_or(|best| standing.funds > best.funds) {
                winner = Some(standing);
            }
        }

        FinalStandings { players, winner }
    }
}
