//! Word source seam and the bundled list-backed implementation.
//!
//! ## WordSource
//!
//! A deployment may fetch its secret words from a remote service, a file, or
//! a fixed list; this crate abstracts the capability instead of implementing
//! a transport. The surrounding system supplies any `WordSource` at game
//! creation and the engine never learns where the word came from.
//!
//! ## WordList
//!
//! Draws uniformly from an owned list using ChaCha8. Seeded construction
//! gives a fully deterministic sequence for tests and replays; plain
//! construction seeds from OS entropy.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core::GameState;
use crate::words::list::DEFAULT_WORDS;

/// A supplier of secret words for new games.
pub trait WordSource {
    /// Produce the next secret word.
    ///
    /// Implementations must return a non-empty word.
    fn next_word(&mut self) -> String;

    /// Start a fresh game with the next word from this source, under the
    /// classic rules.
    fn new_game(&mut self) -> GameState {
        GameState::new(self.next_word())
    }
}

/// Draws words from a fixed list with a deterministic RNG.
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
    rng: ChaCha8Rng,
}

impl WordList {
    /// Create a word list seeded from OS entropy.
    ///
    /// ## Panics
    ///
    /// Panics if `words` is empty or contains an empty word.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(collect_words(words), ChaCha8Rng::from_entropy())
    }

    /// Create a word list with a fixed seed.
    ///
    /// The same seed over the same list draws the same word sequence.
    ///
    /// ## Panics
    ///
    /// Panics if `words` is empty or contains an empty word.
    #[must_use]
    pub fn with_seed<I, S>(words: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(collect_words(words), ChaCha8Rng::seed_from_u64(seed))
    }

    /// The candidate words.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn from_parts(words: Vec<String>, rng: ChaCha8Rng) -> Self {
        assert!(!words.is_empty(), "Word list must not be empty");
        assert!(
            words.iter().all(|w| !w.is_empty()),
            "Word list must not contain empty words"
        );

        Self { words, rng }
    }
}

fn collect_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}

impl Default for WordList {
    /// The bundled [`DEFAULT_WORDS`], seeded from OS entropy.
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> String {
        // Non-empty is asserted at construction.
        let word = self
            .words
            .choose(&mut self.rng)
            .expect("word list is non-empty")
            .clone();
        debug!(len = word.len(), "drew secret word");
        word
    }
}
