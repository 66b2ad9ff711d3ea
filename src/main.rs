//! Terminal Wordle - CLI
//!
//! Picks a random word of the requested length and runs the guess loop over
//! stdin and stdout.

use anyhow::Result;
use clap::Parser;
use std::io;
use wordle_game::{
    core::Problem,
    game::{DEFAULT_MAX_ATTEMPTS, Session},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word: green = right place, yellow = wrong place, grey = not in the word",
    version,
    author
)]
struct Cli {
    /// Length of the hidden word
    #[arg(default_value_t = 5)]
    length: usize,

    /// Valid guesses allowed before the game is lost
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dictionary = Dictionary::default();

    match dictionary.pick(cli.length) {
        Some(word) => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout(), cli.attempts);
            session.run(&mut Problem::new(word))?;
        }
        None => println!("No {} letter words found in the dictionary", cli.length),
    }

    Ok(())
}
