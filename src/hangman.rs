//! Hangman game-state engine
//!
//! A [`Round`] holds everything about one secret word: the revealed pattern,
//! the letters tried so far, the remaining attempts, hint credits and the
//! per-letter score. [`Hangman`] owns the [`WordBank`] for the whole session
//! and at most one active round.
//!
//! # State Machine
//! `NotStarted` → `InProgress` → `Won` | `Lost`
//!
//! Choosing a new word always returns to `InProgress`.

use crate::error::GameError;
use crate::game_state::{Game, GameKind};
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};
use std::fmt;

/// Shown in place of a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was submitted before; nothing changed.
    AlreadyGuessed,
    Present,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    Revealed { letter: char, hints_remaining: u32 },
    NoHintsLeft,
    /// Every letter of the word has already been guessed.
    NothingToReveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// What the player is allowed to see about the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub pattern: String,
    pub remaining_guesses: u32,
    pub hints_remaining: u32,
    pub guessed_letters: Vec<char>,
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.guessed_letters.iter().map(char::to_string).collect();
        writeln!(f, "Guessed Word: {}", self.pattern)?;
        writeln!(f, "Remaining Guesses: {}", self.remaining_guesses)?;
        writeln!(f, "Remaining hints: {}", self.hints_remaining)?;
        write!(f, "Guessed Letters: [{}]", letters.join(", "))
    }
}

fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => letter,
    }
}

/// One play-through of a single secret word.
#[derive(Debug, Clone)]
pub struct Round {
    secret_word: String,
    revealed: Vec<char>,
    guessed_letters: Vec<char>,
    remaining_guesses: u32,
    hints_available: u32,
    score: u32,
}

impl Round {
    #[must_use]
    pub fn new(word: &str) -> Self {
        let secret_word = word.trim().to_uppercase();
        let length = secret_word.chars().count();
        let remaining_guesses = u32::try_from(length).unwrap_or(u32::MAX).saturating_sub(1);

        Self {
            revealed: vec![PLACEHOLDER; length],
            secret_word,
            guessed_letters: Vec::new(),
            remaining_guesses,
            hints_available: remaining_guesses / 2,
            score: 0,
        }
    }

    /// Reveal every position holding `letter`. Returns whether any matched.
    fn reveal(&mut self, letter: char) -> bool {
        let mut found = false;
        for (slot, ch) in self.revealed.iter_mut().zip(self.secret_word.chars()) {
            if ch == letter {
                *slot = letter;
                found = true;
            }
        }
        found
    }

    pub fn make_guess(&mut self, letter: char) -> GuessOutcome {
        let letter = normalize_letter(letter);

        if self.guessed_letters.contains(&letter) {
            debug_log!("{} has already been guessed", letter);
            return GuessOutcome::AlreadyGuessed;
        }

        self.guessed_letters.push(letter);

        if self.reveal(letter) {
            self.score += 1;
            debug_log!("{} was present", letter);
            GuessOutcome::Present
        } else {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
            debug_log!(
                "{} was not present, {} guesses left",
                letter,
                self.remaining_guesses
            );
            GuessOutcome::Absent
        }
    }

    /// Spend one hint credit revealing the leftmost letter not yet guessed.
    ///
    /// A credit is only consumed when a letter is actually revealed.
    pub fn get_hint(&mut self) -> HintOutcome {
        if self.hints_available == 0 {
            return HintOutcome::NoHintsLeft;
        }

        let Some(letter) = self
            .secret_word
            .chars()
            .find(|c| !self.guessed_letters.contains(c))
        else {
            return HintOutcome::NothingToReveal;
        };

        self.make_guess(letter);
        self.hints_available -= 1;
        debug_log!("Hint revealed {}, {} hints left", letter, self.hints_available);

        HintOutcome::Revealed {
            letter,
            hints_remaining: self.hints_available,
        }
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        !self.revealed.contains(&PLACEHOLDER)
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.remaining_guesses == 0
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.has_won() || self.has_lost()
    }

    /// A fully revealed word counts as a win even with no attempts left.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.has_won() {
            RoundStatus::Won
        } else if self.has_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Close the round and return the score it banks: the per-letter score
    /// on a win, zero otherwise.
    pub fn end_round(&mut self) -> u32 {
        self.remaining_guesses = 0;
        info_log!("Thanks for playing");
        if self.has_won() { self.score } else { 0 }
    }

    /// Remaining attempts plus the per-letter score.
    #[must_use]
    pub fn live_score(&self) -> u32 {
        self.remaining_guesses + self.score
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            pattern: self.pattern(),
            remaining_guesses: self.remaining_guesses,
            hints_remaining: self.hints_available,
            guessed_letters: self.guessed_letters.clone(),
        }
    }

    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    #[must_use]
    pub fn pattern(&self) -> String {
        self.revealed.iter().collect()
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.hints_available
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// The engine: one word bank for the session, one round at a time.
pub struct Hangman {
    bank: WordBank,
    round: Option<Round>,
}

impl Hangman {
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self { bank, round: None }
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn remaining_words(&self) -> usize {
        self.bank.remaining_count()
    }

    /// Draw an unused word from the bank and start a round with it.
    pub fn choose_word(&mut self) -> Result<&Round, GameError> {
        let word = self.bank.choose_word()?;
        log::debug!("Chosen word: {}", word);
        Ok(self.start_round(&word))
    }

    /// Start a round from a word that has already been drawn.
    pub fn start_round(&mut self, word: &str) -> &Round {
        self.round.insert(Round::new(word))
    }

    fn active(&self) -> Result<&Round, GameError> {
        self.round.as_ref().ok_or(GameError::NoActiveRound)
    }

    fn active_mut(&mut self) -> Result<&mut Round, GameError> {
        self.round.as_mut().ok_or(GameError::NoActiveRound)
    }

    pub fn make_guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        Ok(self.active_mut()?.make_guess(letter))
    }

    pub fn get_hint(&mut self) -> Result<HintOutcome, GameError> {
        Ok(self.active_mut()?.get_hint())
    }

    pub fn end_round(&mut self) -> Result<u32, GameError> {
        Ok(self.active_mut()?.end_round())
    }

    pub fn live_score(&self) -> Result<u32, GameError> {
        Ok(self.active()?.live_score())
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, GameError> {
        Ok(self.active()?.snapshot())
    }

    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.round.as_ref().map_or(0, Round::hints_remaining)
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.round.as_ref().is_some_and(Round::has_won)
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.round.as_ref().is_some_and(Round::has_lost)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.has_won() || self.has_lost()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.as_ref().map_or(RoundStatus::NotStarted, Round::status)
    }
}

impl Game for Hangman {
    fn kind(&self) -> GameKind {
        GameKind::Hangman
    }

    fn start(&mut self) -> Result<(), GameError> {
        self.choose_word().map(|_| ())
    }

    fn is_over(&self) -> bool {
        self.is_game_over()
    }

    fn finish(&mut self) -> u32 {
        self.end_round().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hangman_with(words: &str) -> Hangman {
        let mut bank = WordBank::with_seed(11);
        bank.load_from_str(words);
        Hangman::new(bank)
    }

    #[test]
    fn test_new_round_counters() {
        let round = Round::new("fish");
        assert_eq!(round.secret_word(), "FISH");
        assert_eq!(round.pattern(), "____");
        assert_eq!(round.remaining_guesses(), 3);
        assert_eq!(round.hints_remaining(), 1);
        assert_eq!(round.score(), 0);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_single_letter_word_starts_lost() {
        let round = Round::new("a");
        assert_eq!(round.remaining_guesses(), 0);
        assert_eq!(round.hints_remaining(), 0);
        assert!(round.has_lost());
    }

    #[test]
    fn test_fish_win_banks_score() {
        let mut game = hangman_with("fish");
        assert_eq!(game.choose_word().unwrap().secret_word(), "FISH");
        assert_eq!(game.hints_remaining(), 1);

        for (i, letter) in ['f', 'i', 's', 'h'].into_iter().enumerate() {
            assert!(!game.has_won());
            assert_eq!(game.make_guess(letter).unwrap(), GuessOutcome::Present);
            assert_eq!(game.round().unwrap().score(), i as u32 + 1);
        }

        assert!(game.has_won());
        assert_eq!(game.live_score().unwrap(), 7);
        assert_eq!(game.end_round().unwrap(), 4);
    }

    #[test]
    fn test_cat_loss_banks_nothing() {
        let mut game = hangman_with("cat");
        game.choose_word().unwrap();
        assert_eq!(game.round().unwrap().remaining_guesses(), 2);

        let wrong = ('A'..='Z').filter(|c| !"CAT".contains(*c));
        let mut previous = 2;
        for (i, letter) in wrong.enumerate() {
            assert_eq!(game.make_guess(letter).unwrap(), GuessOutcome::Absent);
            let remaining = game.round().unwrap().remaining_guesses();
            assert!(remaining <= previous);
            previous = remaining;
            if i == 1 {
                assert_eq!(remaining, 0);
                assert!(game.has_lost());
            }
        }

        assert_eq!(game.round().unwrap().guessed_letters().len(), 23);
        assert_eq!(game.round().unwrap().score(), 0);
        assert_eq!(game.end_round().unwrap(), 0);
    }

    #[test]
    fn test_repeated_letters_score_once() {
        let mut round = Round::new("banana");
        assert_eq!(round.make_guess('a'), GuessOutcome::Present);
        assert_eq!(round.pattern(), "_A_A_A");
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn test_duplicate_guess_changes_nothing() {
        let mut round = Round::new("square");
        round.make_guess('q');
        round.make_guess('z');
        let before = round.snapshot();
        let score_before = round.score();

        assert_eq!(round.make_guess('Q'), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.make_guess('z'), GuessOutcome::AlreadyGuessed);

        assert_eq!(round.snapshot(), before);
        assert_eq!(round.snapshot().to_string(), before.to_string());
        assert_eq!(round.score(), score_before);
    }

    #[test]
    fn test_square_hints() {
        let mut round = Round::new("square");
        assert_eq!(round.hints_remaining(), 2);

        assert_eq!(
            round.get_hint(),
            HintOutcome::Revealed {
                letter: 'S',
                hints_remaining: 1
            }
        );
        assert_eq!(
            round.get_hint(),
            HintOutcome::Revealed {
                letter: 'Q',
                hints_remaining: 0
            }
        );
        assert_eq!(round.pattern(), "SQ____");
        assert_eq!(round.score(), 2);

        let before = round.snapshot();
        assert_eq!(round.get_hint(), HintOutcome::NoHintsLeft);
        assert_eq!(round.snapshot(), before);
        assert!(!round.has_won());
    }

    #[test]
    fn test_hint_skips_guessed_letters() {
        let mut round = Round::new("square");
        round.make_guess('s');
        assert_eq!(
            round.get_hint(),
            HintOutcome::Revealed {
                letter: 'Q',
                hints_remaining: 1
            }
        );
    }

    #[test]
    fn test_hint_on_revealed_word_keeps_credit() {
        let mut round = Round::new("fish");
        for letter in "FISH".chars() {
            round.make_guess(letter);
        }
        assert_eq!(round.get_hint(), HintOutcome::NothingToReveal);
        assert_eq!(round.hints_remaining(), 1);
    }

    #[test]
    fn test_won_takes_precedence_over_lost() {
        let mut round = Round::new("aa");
        assert_eq!(round.make_guess('z'), GuessOutcome::Absent);
        assert_eq!(round.status(), RoundStatus::Lost);

        assert_eq!(round.make_guess('a'), GuessOutcome::Present);
        assert!(round.has_won());
        assert!(round.has_lost());
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.end_round(), 1);
    }

    #[test]
    fn test_end_round_quits_in_progress() {
        let mut round = Round::new("fish");
        round.make_guess('f');
        assert_eq!(round.end_round(), 0);
        assert!(round.has_lost());
        assert!(round.is_game_over());
        assert_eq!(round.end_round(), 0);
    }

    #[test]
    fn test_snapshot_display() {
        let mut round = Round::new("fish");
        round.make_guess('f');
        round.make_guess('z');
        round.make_guess('h');
        assert_eq!(
            round.snapshot().to_string(),
            "Guessed Word: F__H\nRemaining Guesses: 2\nRemaining hints: 1\nGuessed Letters: [F, Z, H]"
        );
    }

    #[test]
    fn test_engine_before_first_round() {
        let mut game = hangman_with("fish");
        assert_eq!(game.status(), RoundStatus::NotStarted);
        assert!(!game.is_game_over());
        assert!(matches!(game.make_guess('f'), Err(GameError::NoActiveRound)));
        assert!(matches!(game.get_hint(), Err(GameError::NoActiveRound)));
        assert!(matches!(game.end_round(), Err(GameError::NoActiveRound)));
        assert!(matches!(game.snapshot(), Err(GameError::NoActiveRound)));
    }

    #[test]
    fn test_engine_draws_each_word_once() {
        let mut game = hangman_with("fish\ncat\nsquare");
        let mut words = Vec::new();
        while game.remaining_words() > 0 {
            words.push(game.choose_word().unwrap().secret_word().to_string());
            assert_eq!(game.status(), RoundStatus::InProgress);
        }
        words.sort();
        assert_eq!(words, ["CAT", "FISH", "SQUARE"]);
        assert!(matches!(game.choose_word(), Err(GameError::EmptyPool)));
    }

    #[test]
    fn test_game_trait_start_and_finish() {
        let mut game = hangman_with("cat");
        assert_eq!(game.kind(), GameKind::Hangman);
        game.start().unwrap();
        assert!(!game.is_over());
        for letter in "CAT".chars() {
            game.make_guess(letter).unwrap();
        }
        assert!(game.is_over());
        assert_eq!(game.finish(), 3);
        assert!(game.start().is_err());
    }
}
