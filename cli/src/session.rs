//! Game session driving the engine and the search from the terminal.
//!
//! The live position is owned here; the search only ever reads it to seed
//! its private tree, and the chosen column is applied back through `make`.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use connect4::{Player, Position, Status};
use mcts::{choose_move, MctsConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::config::Config;

/// Run the configured game mode to completion.
pub fn run(config: &Config) -> Result<()> {
    let seed = match config.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    info!(seed, mode = %config.mode, "starting session");

    match config.mode.as_str() {
        "human" => run_human(config, &mut rng),
        "selfplay" => {
            let final_pos =
                play_selfplay(&config.red_config(), &config.yellow_config(), &mut rng)?;
            println!("{final_pos}");
            announce(&final_pos);
            Ok(())
        }
        other => Err(anyhow!("unknown mode '{}'", other)),
    }
}

/// Human (Yellow) against the bot (Red); the bot moves first.
fn run_human(config: &Config, rng: &mut ChaCha20Rng) -> Result<()> {
    let bot = config.red_config();
    let mut pos = Position::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("You are Yellow; the bot plays Red and moves first.");

    while !pos.status().is_over() {
        if pos.side_to_move() == Player::Red {
            let column = choose_move(&pos, &bot, rng)?;
            pos.make(column)?;
            info!(column, "bot move");
            println!("\nBot drops in column {column}:\n{pos}");
        } else {
            let column = prompt_column(&mut input, &pos)?;
            pos.make(column)?;
            println!("\n{pos}");
        }
    }

    announce(&pos);
    Ok(())
}

/// Read a column from the terminal, re-prompting until it is legal.
fn prompt_column(input: &mut impl BufRead, position: &Position) -> Result<usize> {
    let legal = position.legal_moves();

    loop {
        print!("Your move (column 0-6): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow!("input closed before the game ended"));
        }

        match line.trim().parse::<usize>() {
            Ok(column) if legal.contains(&column) => return Ok(column),
            _ => println!("Column must be one of {:?}", legal),
        }
    }
}

/// Two bots play each other to completion; returns the final position.
pub fn play_selfplay(
    red: &MctsConfig,
    yellow: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<Position> {
    let mut pos = Position::new();

    while !pos.status().is_over() {
        let config = match pos.side_to_move() {
            Player::Red => red,
            Player::Yellow => yellow,
        };
        let column = choose_move(&pos, config, rng)?;
        info!(side = %pos.side_to_move(), column, "move chosen");
        pos.make(column)?;
    }

    Ok(pos)
}

fn announce(position: &Position) {
    match position.status() {
        Status::Won(player) => println!("{player} wins!"),
        Status::Draw => println!("Draw."),
        Status::Ongoing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selfplay_game_reaches_a_terminal_state() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let config = MctsConfig::for_testing().with_iterations(20);

        let pos = play_selfplay(&config, &config, &mut rng).unwrap();

        assert!(pos.status().is_over());
        assert!(pos.legal_moves().is_empty());
    }

    #[test]
    fn selfplay_is_reproducible_for_a_seed() {
        let config = MctsConfig::for_testing().with_iterations(20);

        let mut first_rng = ChaCha20Rng::seed_from_u64(7);
        let mut second_rng = ChaCha20Rng::seed_from_u64(7);

        let first = play_selfplay(&config, &config, &mut first_rng).unwrap();
        let second = play_selfplay(&config, &config, &mut second_rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn prompt_column_skips_illegal_input() {
        let pos = Position::new();
        let mut input = io::Cursor::new(b"nope\n9\n3\n".to_vec());

        let column = prompt_column(&mut input, &pos).unwrap();
        assert_eq!(column, 3);
    }
}
