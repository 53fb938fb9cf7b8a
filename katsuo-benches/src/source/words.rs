//! Synthetic word lists for probe table benchmarking.

use crate::source::SyntheticError;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Configuration for synthetic word list generation.
#[derive(Clone, Debug)]
pub struct SyntheticWordConfig {
    /// Number of words to generate.
    pub word_count: usize,
    /// Minimum generated word length.
    pub min_length: usize,
    /// Maximum generated word length.
    pub max_length: usize,
    /// Characters words are drawn from.
    ///
    /// A short alphabet makes four-byte prefixes repeat, which concentrates
    /// keys on few home slots.
    pub alphabet: String,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// A seeded list of words. Words may repeat.
#[derive(Clone, Debug)]
pub struct SyntheticWords {
    words: Vec<String>,
    alphabet: Vec<char>,
}

impl SyntheticWords {
    /// Generates words from the supplied configuration.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &SyntheticWordConfig) -> Result<Self, SyntheticError> {
        validate_word_config(config)?;
        let alphabet: Vec<char> = config.alphabet.chars().collect();
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let mut words = Vec::with_capacity(config.word_count);
        for _ in 0..config.word_count {
            let length = rng.gen_range(config.min_length..=config.max_length);
            let mut word = String::with_capacity(length);
            for _ in 0..length {
                let letter = alphabet
                    .choose(&mut rng)
                    .ok_or(SyntheticError::EmptyAlphabet)?;
                word.push(*letter);
            }
            words.push(word);
        }
        Ok(Self { words, alphabet })
    }

    /// Returns the generated words in generation order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the word at `index` with a character outside the alphabet
    /// appended.
    ///
    /// The result shares the original's four-byte prefix when the original is
    /// at least four bytes long, so it probes the same cluster, yet it can
    /// never equal a generated word. Returns `None` when `index` is out of
    /// range or no marker character is free.
    #[must_use]
    pub fn absent_variant(&self, index: usize) -> Option<String> {
        let word = self.words.get(index)?;
        let marker = ('A'..='Z')
            .chain('0'..='9')
            .find(|candidate| !self.alphabet.contains(candidate))?;
        Some(format!("{word}{marker}"))
    }
}

fn validate_word_config(config: &SyntheticWordConfig) -> Result<(), SyntheticError> {
    if config.word_count == 0 {
        return Err(SyntheticError::ZeroWords);
    }
    if config.alphabet.is_empty() {
        return Err(SyntheticError::EmptyAlphabet);
    }
    if config.min_length == 0 {
        return Err(SyntheticError::ZeroWordLength);
    }
    if config.min_length > config.max_length {
        return Err(SyntheticError::InvalidWordLengthRange {
            min_length: config.min_length,
            max_length: config.max_length,
        });
    }
    Ok(())
}
