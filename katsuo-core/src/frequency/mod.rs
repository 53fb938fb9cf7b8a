//! Word-frequency ranking and secret-word extraction.
//!
//! Prose is normalised by dropping ASCII punctuation and lowercasing ASCII
//! letters, then split on whitespace. Distinct words are ranked by descending occurrence
//! count; words with equal counts keep the order in which they first appeared
//! in the text, so a ranking is reproducible for a given corpus.
//!
//! A secret is the concatenation of the words at a fixed list of 1-based
//! ranks, in list order.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::error::FrequencyError;

/// Ranks concatenated to form the secret of the reference corpus.
pub const SECRET_RANKS: [usize; 6] = [11, 23, 22, 43, 3, 47];

/// Splits `text` into words with ASCII punctuation removed and ASCII letters
/// lowercased. Non-ASCII characters pass through unchanged.
///
/// Punctuation is deleted rather than replaced, so `"don't"` becomes
/// `"dont"` and `"end.Start"` becomes `"endstart"`.
///
/// # Examples
/// ```
/// use katsuo_core::frequency::tokenize;
///
/// assert_eq!(tokenize("It was the best -- of times!"), ["it", "was", "the", "best", "of", "times"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|ch| !ch.is_ascii_punctuation())
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// A distinct word and its number of occurrences.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordCount {
    word: String,
    count: usize,
}

impl WordCount {
    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns how often the word occurred.
    #[must_use]
    #[rustfmt::skip]
    pub fn count(&self) -> usize { self.count }
}

/// Occurrence counts for the distinct words of a corpus, in ranked order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordFrequencies {
    ranked: Vec<WordCount>,
    total: usize,
}

impl WordFrequencies {
    /// Counts `tokens` and ranks the distinct words.
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut ranked: Vec<WordCount> = Vec::new();
        let mut total = 0_usize;

        for token in tokens {
            total += 1;
            let word = token.into();
            match positions.get(&word) {
                Some(&position) => ranked[position].count += 1,
                None => {
                    positions.insert(word.clone(), ranked.len());
                    ranked.push(WordCount { word, count: 1 });
                }
            }
        }

        // `sort_by` is stable: ties stay in first-appearance order.
        ranked.sort_by(|left, right| right.count.cmp(&left.count));
        Self { ranked, total }
    }

    /// Tokenises and counts `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Returns the distinct words, most frequent first.
    #[must_use]
    pub fn ranked(&self) -> &[WordCount] {
        &self.ranked
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.ranked.len()
    }

    /// Returns the number of tokens counted.
    #[must_use]
    #[rustfmt::skip]
    pub fn total(&self) -> usize { self.total }

    /// Returns the word at 1-based `rank`.
    #[must_use]
    pub fn at_rank(&self, rank: usize) -> Option<&WordCount> {
        rank.checked_sub(1).and_then(|index| self.ranked.get(index))
    }
}

/// Concatenates the words at `ranks` (1-based, in the given order).
///
/// # Errors
/// Returns [`FrequencyError::ZeroRank`] when a rank is `0`, and
/// [`FrequencyError::InsufficientVocabulary`] when the corpus has fewer
/// distinct words than the largest rank requested.
///
/// # Examples
/// ```
/// use katsuo_core::frequency::{WordFrequencies, extract_secret};
///
/// # fn main() -> Result<(), katsuo_core::FrequencyError> {
/// let freq = WordFrequencies::from_text("b a b c b a");
/// assert_eq!(extract_secret(&freq, &[2, 1, 3])?, "abc");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "frequency.extract_secret",
    err,
    skip(frequencies),
    fields(distinct = frequencies.distinct(), tokens = frequencies.total()),
)]
pub fn extract_secret(
    frequencies: &WordFrequencies,
    ranks: &[usize],
) -> Result<String, FrequencyError> {
    if ranks.contains(&0) {
        return Err(FrequencyError::ZeroRank);
    }
    let required = ranks.iter().copied().max().unwrap_or(0);
    let available = frequencies.distinct();
    if required > available {
        return Err(FrequencyError::InsufficientVocabulary {
            required,
            available,
        });
    }

    let mut secret = String::new();
    for &rank in ranks {
        if let Some(entry) = frequencies.at_rank(rank) {
            debug!(rank, word = entry.word(), count = entry.count(), "selected word");
            secret.push_str(entry.word());
        }
    }
    Ok(secret)
}
