use crate::error::GameError;
use crate::info_log;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Words shorter than this would start a round with no guesses left.
const MIN_WORD_LENGTH: usize = 2;

/// Only entries made entirely of ASCII letters can be revealed by guessing.
fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    if word.len() >= MIN_WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word)
    } else {
        None
    }
}

/// The catalog of playable words and the ones already played this session.
pub struct WordBank {
    all_words: Vec<String>,
    catalog: HashSet<String>,
    used_words: HashSet<String>,
    rng: StdRng,
}

impl WordBank {
    /// An empty bank drawing from an OS-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// An empty bank with a reproducible draw order.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            all_words: Vec::new(),
            catalog: HashSet::new(),
            used_words: HashSet::new(),
            rng,
        }
    }

    /// Add words parsed one per line from `data`. Returns how many were new.
    pub fn load_from_str(&mut self, data: &str) -> usize {
        self.extend(data.lines().filter_map(normalize))
    }

    /// Add words read one per line from the file at `path`.
    ///
    /// The catalog is left untouched if the file cannot be opened or read.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, GameError> {
        let path = path.as_ref();
        let source_error = |source| GameError::WordSource {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(source_error)?;
        let reader = BufReader::new(file);
        let mut words = Vec::new();
        for line in reader.lines() {
            if let Some(word) = normalize(&line.map_err(source_error)?) {
                words.push(word);
            }
        }

        let added = self.extend(words);
        info_log!("Loaded {} words from {}", added, path.display());
        Ok(added)
    }

    fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) -> usize {
        let before = self.all_words.len();
        for word in words {
            if !self.catalog.insert(word.clone()) {
                continue;
            }
            log::debug!("adding {}", word);
            self.all_words.push(word);
        }
        self.all_words.len() - before
    }

    /// Pick an unused word uniformly at random and mark it used.
    pub fn choose_word(&mut self) -> Result<String, GameError> {
        let unused: Vec<&String> = self
            .all_words
            .iter()
            .filter(|word| !self.used_words.contains(*word))
            .collect();

        let word = unused
            .choose(&mut self.rng)
            .map(|word| (*word).clone())
            .ok_or(GameError::EmptyPool)?;

        self.used_words.insert(word.clone());
        Ok(word)
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.all_words.len() - self.used_words.len()
    }

    #[must_use]
    pub fn all_words(&self) -> &[String] {
        &self.all_words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_uppercases_and_trims() {
        let mut bank = WordBank::with_seed(1);
        let added = bank.load_from_str("  fish \nCat\nsquare");
        assert_eq!(added, 3);
        assert_eq!(bank.all_words(), ["FISH", "CAT", "SQUARE"]);
    }

    #[test]
    fn test_load_from_str_skips_blank_lines() {
        let mut bank = WordBank::with_seed(1);
        bank.load_from_str("fish\n\n   \ncat\n");
        assert_eq!(bank.len(), 2);
        assert!(bank.all_words().iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_load_from_str_skips_unguessable_entries() {
        let mut bank = WordBank::with_seed(1);
        let added = bank.load_from_str("ice-cream\nhot dog\nr2d2\ndon't\nx\nfish");
        assert_eq!(added, 1);
        assert_eq!(bank.all_words(), ["FISH"]);
    }

    #[test]
    fn test_load_large_word_list() {
        let words: Vec<String> = (0..60_000u32)
            .map(|mut n| {
                let mut word = String::new();
                for _ in 0..4 {
                    word.push(char::from(b'a' + (n % 26) as u8));
                    n /= 26;
                }
                word
            })
            .collect();
        let data = words.join("\n");

        let mut bank = WordBank::with_seed(1);
        assert_eq!(bank.load_from_str(&data), 60_000);
        assert_eq!(bank.load_from_str(&data.to_uppercase()), 0);
        assert_eq!(bank.remaining_count(), 60_000);
    }

    #[test]
    fn test_load_from_str_collapses_case_duplicates() {
        let mut bank = WordBank::with_seed(1);
        bank.load_from_str("fish\nFISH\nFish");
        assert_eq!(bank.all_words(), ["FISH"]);
    }

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let mut bank = WordBank::with_seed(1);
        let added = bank.load_from_str(EMBEDDED_WORDBANK);
        assert!(added > 10);
        assert!(bank.all_words().iter().all(|w| w.len() > 1));
    }

    #[test]
    fn test_load_from_missing_file_leaves_catalog_unchanged() {
        let mut bank = WordBank::with_seed(1);
        bank.load_from_str("fish");
        let result = bank.load_from_file("sirNotAppearingInThisFilm.txt");
        assert!(matches!(result, Err(GameError::WordSource { .. })));
        assert_eq!(bank.all_words(), ["FISH"]);
    }

    #[test]
    fn test_choose_word_never_repeats() {
        let mut bank = WordBank::with_seed(7);
        bank.load_from_str("fish\ncat\nsquare\nhangman\nrust");
        let mut seen = HashSet::new();
        for expected_remaining in (0..5).rev() {
            let word = bank.choose_word().unwrap();
            assert!(seen.insert(word));
            assert_eq!(bank.remaining_count(), expected_remaining);
        }
    }

    #[test]
    fn test_choose_word_from_exhausted_pool() {
        let mut bank = WordBank::with_seed(3);
        bank.load_from_str("fish");
        assert_eq!(bank.choose_word().unwrap(), "FISH");
        assert!(matches!(bank.choose_word(), Err(GameError::EmptyPool)));
        assert_eq!(bank.remaining_count(), 0);
    }

    #[test]
    fn test_choose_word_from_empty_bank() {
        let mut bank = WordBank::with_seed(3);
        assert!(bank.is_empty());
        assert!(matches!(bank.choose_word(), Err(GameError::EmptyPool)));
    }
}
