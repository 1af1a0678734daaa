//! CLI high-card game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hcrs::{DECK_SIZE, FinalStandings, Game, GameOptions, RoundOutcome, RoundResult, TurnOutcome};

fn main() {
    println!("High-card CLI example (type 'q' to quit)");

    let Some(players) = prompt_players() else {
        return;
    };

    let options = GameOptions::default().with_players(players);
    let max_rounds = options.max_rounds();
    println!("Maximum number of rounds that can be played with {players} players is {max_rounds}");

    let Some(requested) = prompt_rounds(max_rounds) else {
        return;
    };

    let options = options.with_rounds(requested).clamp_rounds();
    if options.rounds < requested {
        println!(
            "Adjusted number of rounds to maximum possible: {}",
            options.rounds
        );
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(options, seed);

    for round_num in 1..=options.rounds {
        println!("Round {round_num}");
        match game.play_round() {
            RoundOutcome::Played(result) => print_round(&result),
            RoundOutcome::Halted => {
                println!("Not enough players with funds to continue the game.");
                break;
            }
        }
    }

    print_standings(&game.final_standings());
}

fn prompt_players() -> Option<u8> {
    loop {
        let count = prompt_usize("Enter number of players: ")?;
        if (2..=DECK_SIZE).contains(&count) {
            return Some(count as u8);
        }
        println!("Please enter a player count between 2 and {DECK_SIZE}.");
    }
}

fn prompt_rounds(max_rounds: u32) -> Option<u32> {
    loop {
        let rounds = prompt_usize(&format!("Enter number of rounds (1 to {max_rounds}): "))?;
        if rounds >= 1 {
            return Some(rounds as u32);
        }
        println!("Please enter at least one round.");
    }
}

fn print_round(result: &RoundResult) {
    for turn in &result.turns {
        if turn.reshuffled {
            println!("Reshuffling deck");
        }
        match turn.outcome {
            TurnOutcome::Drew(card) => println!("Player {} draws {card}", turn.player_id),
            TurnOutcome::Skipped => println!("Player {} has no funds to bet.", turn.player_id),
        }
    }

    match &result.winner {
        Some(winner) => println!(
            "Player {} wins this round with {}",
            winner.player_id, winner.card
        ),
        None => println!("No winner this round."),
    }
}

fn print_standings(standings: &FinalStandings) {
    println!("\nFinal Results:");
    for standing in &standings.players {
        println!("Player {} has {} funds", standing.player_id, standing.funds);
    }
    if let Some(winner) = standings.winner {
        println!(
            "Player {} wins the game with {} funds!",
            winner.player_id, winner.funds
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
