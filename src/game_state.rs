use crate::error::GameError;
use crate::hangman::{GameSnapshot, GuessOutcome, Hangman, HintOutcome, RoundStatus};
use crate::info_log;
use crate::wordbank::WordBank;
use std::fmt;
use std::str::FromStr;

/// The games the arcade can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Hangman,
}

impl GameKind {
    pub const ALL: &'static [GameKind] = &[GameKind::Hangman];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameKind::Hangman => "Hangman",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameKind {
    type Err = GameError;

    /// Accepts a game name (any case) or its 1-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        if let Ok(number) = choice.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| GameKind::ALL.get(index))
                .copied()
                .ok_or_else(|| GameError::UnknownGame(choice.to_string()));
        }
        GameKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(choice))
            .ok_or_else(|| GameError::UnknownGame(choice.to_string()))
    }
}

/// What every arcade game must offer the loader.
pub trait Game {
    fn kind(&self) -> GameKind;
    /// Begin a new play-through.
    fn start(&mut self) -> Result<(), GameError>;
    fn is_over(&self) -> bool;
    /// End the play-through and return the score it banks.
    fn finish(&mut self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play(GameKind),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    Guess(char),
    Hint,
    Quit,
}

/// How a finished round went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub secret_word: String,
    pub status: RoundStatus,
    pub score: u32,
}

/// Trait for abstracting the arcade UI (CLI or TUI).
///
/// `read_*` methods return `None` when the input was rejected; the loop
/// simply asks again.
pub trait GameInterface {
    fn display_menu(&mut self, games: &[GameKind], total_score: u32);
    fn read_menu_choice(&mut self) -> Option<MenuAction>;
    fn display_state(&mut self, snapshot: &GameSnapshot, live_score: u32);
    fn read_turn_action(&mut self, hints_available: bool) -> Option<TurnAction>;
    fn display_guess_outcome(&mut self, letter: char, outcome: GuessOutcome);
    fn display_hint(&mut self, outcome: HintOutcome);
    fn display_round_over(&mut self, summary: &RoundSummary);
    fn display_message(&mut self, message: &str);
    fn display_goodbye(&mut self, total_score: u32);
}

/// The loader: every game plus the running total for the session.
pub struct Arcade {
    hangman: Hangman,
    total_score: u32,
}

impl Arcade {
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self {
            hangman: Hangman::new(bank),
            total_score: 0,
        }
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn hangman(&self) -> &Hangman {
        &self.hangman
    }
}

/// Show the menu, run the chosen game, and bank its score until the player
/// quits. Returns the session total.
pub fn arcade_loop<I: GameInterface + ?Sized>(arcade: &mut Arcade, ui: &mut I) -> u32 {
    loop {
        ui.display_menu(GameKind::ALL, arcade.total_score);

        let Some(action) = ui.read_menu_choice() else {
            continue;
        };

        let kind = match action {
            MenuAction::Quit => {
                ui.display_goodbye(arcade.total_score);
                break;
            }
            MenuAction::Play(kind) => kind,
        };

        let result = match kind {
            GameKind::Hangman => play_hangman(&mut arcade.hangman, ui),
        };

        match result {
            Ok(points) => {
                arcade.total_score += points;
                info_log!("{} banked {} points, total {}", kind, points, arcade.total_score);
            }
            Err(e) => ui.display_message(&e.to_string()),
        }
    }

    arcade.total_score
}

/// Play one round of Hangman and return the score it banks.
pub fn play_hangman<I: GameInterface + ?Sized>(
    game: &mut Hangman,
    ui: &mut I,
) -> Result<u32, GameError> {
    ui.display_message(&format!("Welcome to {}!", game.kind()));

    match game.start() {
        Ok(()) => {}
        Err(GameError::EmptyPool) => {
            ui.display_message("Nothing left to guess!");
            return Ok(0);
        }
        Err(e) => return Err(e),
    }

    while !game.is_over() {
        ui.display_state(&game.snapshot()?, game.live_score()?);

        let Some(action) = ui.read_turn_action(game.hints_remaining() > 0) else {
            continue;
        };

        match action {
            TurnAction::Guess(letter) => {
                let outcome = game.make_guess(letter)?;
                ui.display_guess_outcome(letter, outcome);
            }
            TurnAction::Hint => {
                let outcome = game.get_hint()?;
                ui.display_hint(outcome);
            }
            TurnAction::Quit => break,
        }
    }

    let score = game.finish();
    let round = game.round().ok_or(GameError::NoActiveRound)?;
    ui.display_round_over(&RoundSummary {
        secret_word: round.secret_word().to_string(),
        status: round.status(),
        score,
    });

    Ok(score)
}
