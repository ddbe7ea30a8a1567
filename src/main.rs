use hangman_arcade::cli::{CliInterface, parse_cli};
use hangman_arcade::logging::{default_log_path, init_logging};
use hangman_arcade::tui::TuiInterface;
use hangman_arcade::wordbank::{EMBEDDED_WORDBANK, WordBank};
use hangman_arcade::{Arcade, arcade_loop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| if cli.tui { default_log_path() } else { None });
    if let Err(e) = init_logging(cli.debug, log_file.as_deref()) {
        eprintln!("Failed to open log file: {e}");
    }

    let mut bank = WordBank::new();
    match &cli.wordbank_path {
        Some(path) => {
            if let Err(e) = bank.load_from_file(path) {
                log::warn!("{e}");
                eprintln!("{e}");
            }
        }
        None => {
            bank.load_from_str(EMBEDDED_WORDBANK);
        }
    }
    println!("Loaded {} words.", bank.len());

    let mut arcade = Arcade::new(bank);
    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        let total = arcade_loop(&mut arcade, &mut interface);
        drop(interface);
        println!("Final Score: {total}");
    } else {
        println!("Welcome to the Hangman Arcade!");
        let mut interface = CliInterface::new(io::stdin().lock());
        arcade_loop(&mut arcade, &mut interface);
    }

    ExitCode::SUCCESS
}
