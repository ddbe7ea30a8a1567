use crate::game_state::{GameInterface, GameKind, MenuAction, RoundSummary, TurnAction};
use crate::hangman::{GameSnapshot, GuessOutcome, HintOutcome, RoundStatus};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

const QUIT_COMMAND: &str = "zz";

/// Hangman Arcade CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Log loaded entries and chosen words
    #[arg(short, long)]
    pub debug: bool,

    /// Append log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Read one line, trimmed. `None` at end of input.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn parse_guess(input: &str) -> Option<char> {
    input
        .trim()
        .chars()
        .next()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

pub fn display_menu(games: &[GameKind], total_score: u32) {
    println!("\nCurrent score: {total_score}");
    println!("You may choose from the following games:");
    for (i, game) in games.iter().enumerate() {
        println!("\t{}. {}", i + 1, game);
    }
}

pub fn read_menu_choice<R: BufRead>(reader: &mut R) -> Option<MenuAction> {
    println!("Please enter your choice ({QUIT_COMMAND} to exit):");
    let Some(input) = read_trimmed_line(reader) else {
        return Some(MenuAction::Quit);
    };

    if input.eq_ignore_ascii_case(QUIT_COMMAND) {
        return Some(MenuAction::Quit);
    }

    match input.parse::<GameKind>() {
        Ok(kind) => Some(MenuAction::Play(kind)),
        Err(e) => {
            println!("{e}");
            None
        }
    }
}

pub fn display_state(snapshot: &GameSnapshot, live_score: u32) {
    println!("\n{snapshot}");
    println!("Score: {live_score}");
}

pub fn read_turn_action<R: BufRead>(reader: &mut R, hints_available: bool) -> Option<TurnAction> {
    println!("Your options are:");
    println!("\t 1: Guess a letter");
    if hints_available {
        println!("\t 2: Get a hint");
    }
    println!("\t 3: exit");
    println!("Enter your choice:");

    let Some(input) = read_trimmed_line(reader) else {
        return Some(TurnAction::Quit);
    };

    match input.parse::<u8>() {
        Ok(1) => {
            println!("What is your guess:");
            let Some(guess) = read_trimmed_line(reader) else {
                return Some(TurnAction::Quit);
            };
            let letter = parse_guess(&guess);
            if letter.is_none() {
                println!("{guess} is not a letter.");
            }
            letter.map(TurnAction::Guess)
        }
        Ok(2) => Some(TurnAction::Hint),
        Ok(3) => Some(TurnAction::Quit),
        _ => {
            println!("{input} is not a valid option.");
            None
        }
    }
}

pub fn display_guess_outcome(letter: char, outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::AlreadyGuessed => println!("{letter} has already been guessed"),
        GuessOutcome::Present => println!("You chose: {letter}\n{letter} was present!"),
        GuessOutcome::Absent => println!("You chose: {letter}\n{letter} was not present!"),
    }
}

pub fn display_hint(outcome: HintOutcome) {
    match outcome {
        HintOutcome::Revealed {
            letter,
            hints_remaining,
        } => println!("Hint: the word contains {letter} ({hints_remaining} hints left)"),
        HintOutcome::NoHintsLeft => println!("No more hints!"),
        HintOutcome::NothingToReveal => println!("Nothing left to reveal!"),
    }
}

pub fn display_round_over(summary: &RoundSummary) {
    match summary.status {
        RoundStatus::Won => println!("You won! The word was {}.", summary.secret_word),
        _ => println!("The word was {}.", summary.secret_word),
    }
    println!("Thanks for playing");
    println!("Round score: {}", summary.score);
}

pub fn display_goodbye(total_score: u32) {
    println!("Thank you for playing!");
    println!("Final Score: {total_score}");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_menu(&mut self, games: &[GameKind], total_score: u32) {
        display_menu(games, total_score);
    }

    fn read_menu_choice(&mut self) -> Option<MenuAction> {
        read_menu_choice(&mut self.reader)
    }

    fn display_state(&mut self, snapshot: &GameSnapshot, live_score: u32) {
        display_state(snapshot, live_score);
    }

    fn read_turn_action(&mut self, hints_available: bool) -> Option<TurnAction> {
        read_turn_action(&mut self.reader, hints_available)
    }

    fn display_guess_outcome(&mut self, letter: char, outcome: GuessOutcome) {
        display_guess_outcome(letter, outcome);
    }

    fn display_hint(&mut self, outcome: HintOutcome) {
        display_hint(outcome);
    }

    fn display_round_over(&mut self, summary: &RoundSummary) {
        display_round_over(summary);
    }

    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_goodbye(&mut self, total_score: u32) {
        display_goodbye(total_score);
    }
}
