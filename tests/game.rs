//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hcrs::{
    BET_AMOUNT, BetError, Card, CardError, DECK_SIZE, Deck, DrawError, Game, GameOptions, Player,
    Rank, RoundOutcome, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn stack_deck(game: &mut Game, draws: &[Card]) {
    let mut cards = draws.to_vec();
    cards.reverse();
    game.deck = Deck::from_cards(cards);
}

fn total_funds(game: &Game) -> usize {
    game.players.iter().map(Player::funds).sum()
}

#[test]
fn rank_values_cover_two_through_ace() {
    for (rank, expected) in Rank::ALL.into_iter().zip(2u8..=14) {
        assert_eq!(rank.value(), expected);
    }

    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(card(Suit::Clubs, Rank::Ace).rank_value(), 14);
}

#[test]
fn card_symbols_outside_the_fixed_sets_are_rejected() {
    let err = Card::from_symbols("Hearts", "17").unwrap_err();
    assert_eq!(err, CardError::InvalidRank { value: "17".into() });
    assert_eq!(
        err.to_string(),
        "invalid card rank: 17 (must be one of 2, 3, 4, 5, 6, 7, 8, 9, 10, Jack, Queen, King, Ace)"
    );

    let err = Card::from_symbols("Stars", "King").unwrap_err();
    assert_eq!(err, CardError::InvalidSuit { value: "Stars".into() });
    assert_eq!(
        err.to_string(),
        "invalid card suit: Stars (must be one of Hearts, Diamonds, Clubs, Spades)"
    );

    assert_eq!(
        Card::from_symbols("Hearts", "King").unwrap(),
        card(Suit::Hearts, Rank::King)
    );
}

#[test]
fn card_displays_as_rank_of_suit() {
    assert_eq!(card(Suit::Hearts, Rank::King).to_string(), "King of Hearts");
    assert_eq!(card(Suit::Clubs, Rank::Two).to_string(), "2 of Clubs");
    assert_eq!(card(Suit::Spades, Rank::Ten).to_string(), "10 of Spades");
}

#[test]
fn built_deck_holds_52_distinct_cards() {
    let mut deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    // Rebuilding from a drained state yields the same full deck.
    while deck.draw().is_ok() {}
    deck.build();
    assert_eq!(deck.len(), DECK_SIZE);

    let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::new();
    let before: Vec<Card> = deck.cards().to_vec();

    deck.shuffle(&mut rng);
    let after: Vec<Card> = deck.cards().to_vec();

    assert_ne!(before, after);
    let before_set: HashSet<Card> = before.into_iter().collect();
    let after_set: HashSet<Card> = after.into_iter().collect();
    assert_eq!(before_set, after_set);
}

#[test]
fn draw_takes_the_top_card() {
    let mut deck = Deck::new();

    // The canonical build order puts the Ace of Spades on top.
    assert_eq!(deck.draw().unwrap(), card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.len(), DECK_SIZE - 1);

    for _ in 0..DECK_SIZE - 1 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.draw().unwrap_err(), DrawError::Empty);
}

#[test]
fn bet_drains_funds_one_at_a_time() {
    let mut player = Player::new(1, 3);

    for remaining in (0..3).rev() {
        assert_eq!(player.bet().unwrap(), BET_AMOUNT);
        assert_eq!(player.funds(), remaining);
    }

    let err = player.bet().unwrap_err();
    assert_eq!(err, BetError::InsufficientFunds { player: 1 });
    assert_eq!(err.to_string(), "player 1 has no funds to bet");
}

#[test]
fn receive_winnings_adds_any_amount() {
    let mut player = Player::new(2, 5);

    player.receive_winnings(0);
    assert_eq!(player.funds(), 5);

    player.receive_winnings(7);
    assert_eq!(player.funds(), 12);
}

#[test]
fn new_game_seats_players_with_round_count_funds() {
    let options = GameOptions::default().with_players(3).with_rounds(6);
    let game = Game::new(options, 42);

    assert_eq!(game.player_count(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.rounds(), 6);

    for (index, player) in game.players.iter().enumerate() {
        assert_eq!(player.id() as usize, index + 1);
        assert_eq!(player.funds(), 6);
    }
}

#[test]
fn highest_rank_takes_the_pot() {
    let options = GameOptions::default().with_players(2).with_rounds(3);
    let mut game = Game::new(options, 42);
    stack_deck(
        &mut game,
        &[card(Suit::Hearts, Rank::Two), card(Suit::Diamonds, Rank::King)],
    );

    let RoundOutcome::Played(result) = game.play_round() else {
        panic!("round should have been played");
    };

    assert_eq!(result.pot, 2);
    let winner = result.winner.unwrap();
    assert_eq!(winner.player_id, 2);
    assert_eq!(winner.card, card(Suit::Diamonds, Rank::King));

    // Loser is down a bet, winner banked the whole pot.
    assert_eq!(game.players[0].funds(), 2);
    assert_eq!(game.players[1].funds(), 4);
}

#[test]
fn round_winner_keeps_the_earlier_player_on_rank_ties() {
    let options = GameOptions::default().with_players(3).with_rounds(2);
    let mut game = Game::new(options, 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Clubs, Rank::Two),
        ],
    );

    let RoundOutcome::Played(result) = game.play_round() else {
        panic!("round should have been played");
    };

    assert_eq!(result.turns.len(), 3);
    let winner = result.winner.unwrap();
    assert_eq!(winner.player_id, 1);
    assert_eq!(winner.card, card(Suit::Hearts, Rank::Ace));
    assert_eq!(game.players[0].funds(), 4);
}

#[test]
fn two_player_single_round_transfers_the_losing_bet() {
    let options = GameOptions::default().with_players(2).with_rounds(1);
    let mut game = Game::new(options, 42);

    let result = game.start_game();
    assert!(!result.halted);
    assert_eq!(result.rounds.len(), 1);
    assert_eq!(result.rounds[0].pot, 2);

    let mut funds: Vec<usize> = game.players.iter().map(Player::funds).collect();
    funds.sort_unstable();
    assert_eq!(funds, [0, 2]);
}

#[test]
fn game_with_solvent_players_runs_all_rounds() {
    // 3 players x 17 rounds fits in a single pass through the deck.
    let options = GameOptions::default().with_players(3).with_rounds(17);
    let mut game = Game::new(options, 5);
    let total = total_funds(&game);

    let result = game.start_game();
    assert!(!result.halted);
    assert_eq!(result.rounds.len(), 17);
    assert!(
        result
            .rounds
            .iter()
            .flat_map(|round| &round.turns)
            .all(|turn| !turn.reshuffled)
    );
    assert_eq!(total_funds(&game), total);
}

#[test]
fn funds_are_conserved_across_every_round() {
    let options = GameOptions::default().with_players(4).with_rounds(13);
    let mut game = Game::new(options, 9);
    let total = total_funds(&game);

    for _ in 0..13 {
        match game.play_round() {
            RoundOutcome::Played(result) => {
                // The pot is exactly the bets collected, and it all moves to
                // the winner.
                assert_eq!(result.pot, result.turns.len());
                assert_eq!(total_funds(&game), total);
            }
            RoundOutcome::Halted => panic!("game halted early"),
        }
    }
}

#[test]
fn deck_is_rebuilt_when_it_runs_out_mid_game() {
    // 4 players x 27 rounds needs 108 draws, two more than two full decks.
    let options = GameOptions::default().with_players(4).with_rounds(27);
    let mut game = Game::new(options, 11);
    let total = total_funds(&game);

    let result = game.start_game();
    assert!(!result.halted);
    assert_eq!(result.rounds.len(), 27);

    let reshuffles = result
        .rounds
        .iter()
        .flat_map(|round| &round.turns)
        .filter(|turn| turn.reshuffled)
        .count();
    assert_eq!(reshuffles, 2);
    assert_eq!(total_funds(&game), total);
}

#[test]
fn round_halts_when_fewer_than_two_players_have_funds() {
    let options = GameOptions::default().with_players(2).with_rounds(5);
    let mut game = Game::new(options, 3);

    // Drain the second player's bankroll.
    while game.players[1].funds() > 0 {
        game.players[1].bet().unwrap();
    }

    assert!(matches!(game.play_round(), RoundOutcome::Halted));
    // A halted round leaves all state untouched.
    assert_eq!(game.players[0].funds(), 5);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn start_game_stops_at_the_first_halted_round() {
    let options = GameOptions::default().with_players(3).with_rounds(4);
    let mut game = Game::new(options, 8);
    for player in &mut game.players[1..] {
        while player.funds() > 0 {
            player.bet().unwrap();
        }
    }

    let result = game.start_game();
    assert!(result.halted);
    assert!(result.rounds.is_empty());

    let winner = result.standings.winner.unwrap();
    assert_eq!(winner.player_id, 1);
    assert_eq!(winner.funds, 4);
}

#[test]
fn final_standings_prefer_the_earliest_player_on_ties() {
    let options = GameOptions::default().with_players(3).with_rounds(0);
    let game = Game::new(options, 1);

    let standings = game.final_standings();
    assert_eq!(standings.players.len(), 3);
    assert!(standings.players.iter().all(|standing| standing.funds == 0));
    assert_eq!(standings.winner.unwrap().player_id, 1);
}

#[test]
fn round_count_requests_above_the_cap_are_clamped() {
    let options = GameOptions::default().with_players(4).with_rounds(100);
    assert_eq!(options.max_rounds(), 13);
    assert_eq!(options.clamp_rounds().rounds, 13);

    // Requests at or below the cap pass through unchanged.
    let options = GameOptions::default().with_players(4).with_rounds(9);
    assert_eq!(options.clamp_rounds().rounds, 9);
}
