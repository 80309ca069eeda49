//! Game state: the hangman state machine.
//!
//! ## GameState
//!
//! One value per player session:
//! - The secret word, stored exactly as supplied (display casing preserved)
//! - Correctly guessed letters, in guess order
//! - Wrongly guessed letters, in guess order
//! - The rule configuration for this session
//!
//! Everything else is derived on demand: the partially revealed word via
//! [`GameState::word_with_guesses`] and the outcome via [`GameState::status`].
//! No working copy of the word is mutated; the revealed view is always
//! recomputed from the immutable word plus the correct-letter set.
//!
//! The state holds only value data and no external resources, so a session
//! is persisted by serializing the whole struct (see the `snapshot` module)
//! and discarded by dropping it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::error::GuessError;
use super::status::GameStatus;

/// Complete state of one hangman session.
///
/// Comparisons against the secret word are case-insensitive; guessed letters
/// are normalized to lowercase. The word itself keeps its original casing so
/// the revealed view shows what the caller supplied.
///
/// ## Example
///
/// ```
/// use rust_hangman::GameState;
///
/// let mut game = GameState::new("cat");
/// assert_eq!(game.guess("c"), Ok(true));
/// assert_eq!(game.word_with_guesses(), "c--");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The secret word, exactly as supplied at construction.
    word: String,

    /// Guessed letters that occur in the word, in guess order.
    /// SmallVec keeps the at-most-26 letters inline in the common case.
    correct_letters: SmallVec<[char; 8]>,

    /// Guessed letters that do not occur in the word, in guess order.
    wrong_letters: SmallVec<[char; 8]>,

    /// Rules for this session.
    config: GameConfig,
}

impl GameState {
    /// Create a fresh game over `word` with the default rules.
    ///
    /// ## Panics
    ///
    /// Panics if `word` is empty. The word is expected to be alphabetic;
    /// positions holding other characters can never be revealed.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_config(word, GameConfig::default())
    }

    /// Create a fresh game over `word` with the given rules.
    ///
    /// ## Panics
    ///
    /// Panics if `word` is empty.
    #[must_use]
    pub fn with_config(word: impl Into<String>, config: GameConfig) -> Self {
        let word = word.into();
        assert!(!word.is_empty(), "Secret word must not be empty");

        Self {
            word,
            correct_letters: SmallVec::new(),
            wrong_letters: SmallVec::new(),
            config,
        }
    }

    /// Process one guessed letter.
    ///
    /// Returns `Ok(true)` if the guess was consumed (recorded as correct or
    /// wrong), `Ok(false)` if it changed nothing: the letter was already
    /// guessed in either casing, or the game is over. Repeats are idempotent;
    /// only the return value distinguishes the second call from the first.
    ///
    /// ## Errors
    ///
    /// `GuessError::InvalidInput` when `input` is empty, longer than one
    /// character, or not a letter A-Z/a-z. State is untouched on error.
    pub fn guess(&mut self, input: &str) -> Result<bool, GuessError> {
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(GuessError::InvalidInput(input.to_string())),
        };

        if self.status().is_over() || self.has_guessed(letter) {
            return Ok(false);
        }

        if self.word_contains(letter) {
            self.correct_letters.push(letter);
        } else {
            self.wrong_letters.push(letter);
        }

        Ok(true)
    }

    /// Render the word with unguessed positions masked.
    ///
    /// Same length as the secret word; each position shows the original
    /// character if its lowercase form has been guessed, otherwise the
    /// configured placeholder.
    #[must_use]
    pub fn word_with_guesses(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.correct_letters.contains(&c.to_ascii_lowercase()) {
                    c
                } else {
                    self.config.placeholder
                }
            })
            .collect()
    }

    /// Current outcome of the game.
    ///
    /// Win is evaluated before loss: a fully revealed word reads `Won` even
    /// if the wrong-guess limit has also been reached.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let revealed = self
            .word
            .chars()
            .all(|c| self.correct_letters.contains(&c.to_ascii_lowercase()));

        if revealed {
            GameStatus::Won
        } else if self.wrong_letters.len() >= self.config.max_wrong_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether `letter` has already been guessed, in either casing.
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.correct_letters.contains(&letter) || self.wrong_letters.contains(&letter)
    }

    /// The secret word as supplied at construction.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Correctly guessed letters, in guess order.
    #[must_use]
    pub fn correct_letters(&self) -> &[char] {
        &self.correct_letters
    }

    /// Wrongly guessed letters, in guess order.
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    /// Number of wrong guesses so far.
    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.wrong_letters.len()
    }

    /// Wrong guesses left before the game is lost.
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_wrong_guesses.saturating_sub(self.wrong_letters.len())
    }

    /// The rule configuration for this session.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn word_contains(&self, letter: char) -> bool {
        self.word.chars().any(|c| c.to_ascii_lowercase() == letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_new_game() {
        let game = GameState::new("cat");

        assert_eq!(game.word(), "cat");
        assert!(game.correct_letters().is_empty());
        assert!(game.wrong_letters().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining_guesses(), 7);
    }

    #[test]
    #[should_panic(expected = "Secret word must not be empty")]
    fn test_empty_word_panics() {
        GameState::new("");
    }

    #[test]
    fn test_correct_guess() {
        let mut game = GameState::new("cat");

        assert_eq!(game.guess("c"), Ok(true));
        assert_eq!(game.correct_letters(), &['c']);
        assert!(game.wrong_letters().is_empty());
    }

    #[test]
    fn test_wrong_guess() {
        let mut game = GameState::new("cat");

        assert_eq!(game.guess("z"), Ok(true));
        assert!(game.correct_letters().is_empty());
        assert_eq!(game.wrong_letters(), &['z']);
    }

    #[test]
    fn test_repeated_guess_is_noop() {
        let mut game = GameState::new("cat");

        assert_eq!(game.guess("c"), Ok(true));
        let after_first = game.clone();

        assert_eq!(game.guess("c"), Ok(false));
        assert_eq!(game, after_first);
    }

    #[test]
    fn test_case_insensitive_repeat() {
        let mut game = GameState::new("go");

        assert_eq!(game.guess("g"), Ok(true));
        assert_eq!(game.guess("G"), Ok(false));
        assert_eq!(game.correct_letters().len(), 1);
    }

    #[test]
    fn test_uppercase_word_matches_lowercase_guess() {
        let mut game = GameState::new("Cat");

        assert_eq!(game.guess("c"), Ok(true));
        assert_eq!(game.word_with_guesses(), "C--");
    }

    #[test]
    fn test_invalid_input_leaves_state_unchanged() {
        let mut game = GameState::new("cat");
        let before = game.clone();

        for input in ["", "ab", "1", "?", "é"] {
            assert_eq!(
                game.guess(input),
                Err(GuessError::InvalidInput(input.to_string()))
            );
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_word_with_guesses_masks_unguessed() {
        let mut game = GameState::new("banana");

        game.guess("a").unwrap();
        assert_eq!(game.word_with_guesses(), "-a-a-a");

        game.guess("n").unwrap();
        assert_eq!(game.word_with_guesses(), "-anana");
    }

    #[test]
    fn test_win_when_all_letters_guessed() {
        let mut game = GameState::new("cat");

        for letter in ["c", "a", "t"] {
            game.guess(letter).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.word_with_guesses(), "cat");
    }

    #[test]
    fn test_loss_at_limit() {
        let mut game = GameState::new("dog");

        for letter in ["a", "b", "c", "e", "f", "h"] {
            game.guess(letter).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.guess("i").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.word_with_guesses(), "---");
    }

    #[test]
    fn test_loss_is_threshold_not_equality() {
        // A deserialized snapshot may carry more wrong guesses than the
        // limit; it must still read Lost.
        let game = GameState {
            word: "dog".to_string(),
            correct_letters: SmallVec::new(),
            wrong_letters: smallvec!['a', 'b', 'c', 'e', 'f', 'h', 'i', 'j'],
            config: GameConfig::default(),
        };

        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn test_win_checked_before_loss() {
        // Fully revealed word and exhausted guesses at once: win wins.
        let game = GameState {
            word: "go".to_string(),
            correct_letters: smallvec!['g', 'o'],
            wrong_letters: smallvec!['a', 'b', 'c', 'd', 'e', 'f', 'h'],
            config: GameConfig::default(),
        };

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_guess_after_game_over_is_noop() {
        let mut game = GameState::new("a");
        game.guess("a").unwrap();
        assert_eq!(game.status(), GameStatus::Won);

        let finished = game.clone();
        assert_eq!(game.guess("z"), Ok(false));
        assert_eq!(game, finished);
    }

    #[test]
    fn test_has_guessed() {
        let mut game = GameState::new("cat");
        game.guess("c").unwrap();
        game.guess("z").unwrap();

        assert!(game.has_guessed('c'));
        assert!(game.has_guessed('C'));
        assert!(game.has_guessed('z'));
        assert!(!game.has_guessed('a'));
    }

    #[test]
    fn test_remaining_guesses_counts_down() {
        let mut game = GameState::new("cat");

        game.guess("z").unwrap();
        game.guess("y").unwrap();
        assert_eq!(game.wrong_guess_count(), 2);
        assert_eq!(game.remaining_guesses(), 5);

        // Correct guesses don't consume the budget
        game.guess("c").unwrap();
        assert_eq!(game.remaining_guesses(), 5);
    }

    #[test]
    fn test_custom_limit() {
        let config = GameConfig::default().with_max_wrong_guesses(2);
        let mut game = GameState::with_config("cat", config);

        game.guess("x").unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.guess("y").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn test_custom_placeholder() {
        let config = GameConfig::default().with_placeholder('_');
        let mut game = GameState::with_config("cat", config);

        game.guess("a").unwrap();
        assert_eq!(game.word_with_guesses(), "_a_");
    }
}
