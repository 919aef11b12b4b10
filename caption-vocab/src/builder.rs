use std::collections::HashMap;

use displaydoc::Display;
use thiserror::Error;

use crate::{
    normalizer::Normalizer,
    special::SpecialToken,
    tokenizer::Tokenizer,
    vocabulary::Vocabulary,
};

/// A builder to derive a [`Vocabulary`] from training captions.
#[derive(Debug)]
pub struct VocabularyBuilder {
    normalizer: Normalizer,
    tokenizer: Tokenizer,
    min_occurrences: usize,
}

/// The potential errors of the vocabulary builder.
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// The minimum number of occurrences must be at least one
    MinOccurrences,
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        VocabularyBuilder {
            normalizer: Normalizer,
            tokenizer: Tokenizer,
            min_occurrences: 1,
        }
    }
}

impl VocabularyBuilder {
    /// Creates a vocabulary builder which retains every token it sees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum number of occurrences for a token to be retained.
    ///
    /// Defaults to `1`. Reserved tokens are retained regardless of the threshold.
    ///
    /// # Errors
    /// Fails if `min_occurrences` is zero.
    pub fn with_min_occurrences(mut self, min_occurrences: usize) -> Result<Self, BuilderError> {
        if min_occurrences > 0 {
            self.min_occurrences = min_occurrences;
            Ok(self)
        } else {
            Err(BuilderError::MinOccurrences)
        }
    }

    /// Normalizes and tokenizes the caption and brackets it with the start and end tokens.
    pub fn tokenize_caption(&self, caption: impl AsRef<str>) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(self.normalizer.normalize(caption));
        let mut bracketed = Vec::with_capacity(tokens.len() + 2);
        bracketed.push(SpecialToken::Start.as_str().to_string());
        bracketed.extend(tokens);
        bracketed.push(SpecialToken::End.as_str().to_string());
        bracketed
    }

    /// Builds the vocabulary from the training captions.
    ///
    /// Counts the token frequencies over the tokenized captions and retains the tokens which
    /// occur at least the minimum number of times, together with the reserved tokens. The
    /// retained tokens are sorted lexicographically before the indices are assigned, hence the
    /// vocabulary only depends on the caption multiset and the threshold.
    ///
    /// Returns the vocabulary together with the maximum length of the tokenized captions
    /// including the start and end tokens.
    pub fn build<I>(&self, captions: I) -> (Vocabulary, usize)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counts = HashMap::<String, usize>::new();
        let mut max_seq_len = 0;
        for caption in captions {
            let tokens = self.tokenize_caption(caption);
            max_seq_len = max_seq_len.max(tokens.len());
            for token in tokens {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut words = SpecialToken::ALL
            .iter()
            .map(|token| token.as_str().to_string())
            .collect::<Vec<_>>();
        words.extend(counts.into_iter().filter_map(|(token, count)| {
            // the reserved tokens are already seeded, the brackets must not reappear
            (count >= self.min_occurrences && !SpecialToken::is_special(&token)).then(|| token)
        }));
        // sort before the index assignment, map iteration order is not deterministic
        words.sort();

        (Vocabulary::new(words), max_seq_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(vocabulary: &Vocabulary) -> Vec<&str> {
        vocabulary.words().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_build() {
        let (vocabulary, max_seq_len) =
            VocabularyBuilder::new().build(["A Cat!", "a dog."].iter());
        assert_eq!(
            words(&vocabulary),
            ["EOS", "PAD", "SOS", "UNK", "a", "cat", "dog"],
        );
        assert_eq!(max_seq_len, 4);
    }

    #[test]
    fn test_order_independent() {
        let builder = VocabularyBuilder::new();
        let (forward, _) = builder.build(["A Cat!", "a dog."].iter());
        let (reversed, _) = builder.build(["a dog.", "A Cat!"].iter());
        assert_eq!(forward.words(), reversed.words());
    }

    #[test]
    fn test_threshold() {
        let builder = VocabularyBuilder::new().with_min_occurrences(2).unwrap();
        let (vocabulary, max_seq_len) = builder.build(["a cat", "a dog"].iter());
        assert_eq!(words(&vocabulary), ["EOS", "PAD", "SOS", "UNK", "a"]);
        assert_eq!(max_seq_len, 4);
    }

    #[test]
    fn test_reserved_survive_threshold() {
        let builder = VocabularyBuilder::new().with_min_occurrences(10).unwrap();
        let (vocabulary, max_seq_len) = builder.build(["a cat"].iter());
        assert_eq!(words(&vocabulary), ["EOS", "PAD", "SOS", "UNK"]);
        assert_eq!(max_seq_len, 4);
    }

    #[test]
    fn test_empty_corpus() {
        let (vocabulary, max_seq_len) = VocabularyBuilder::new().build(Vec::<String>::new());
        assert_eq!(words(&vocabulary), ["EOS", "PAD", "SOS", "UNK"]);
        assert_eq!(max_seq_len, 0);
    }

    #[test]
    fn test_empty_caption() {
        let builder = VocabularyBuilder::new();
        assert_eq!(builder.tokenize_caption(""), ["SOS", "EOS"]);
        let (_, max_seq_len) = builder.build([""].iter());
        assert_eq!(max_seq_len, 2);
    }

    #[test]
    fn test_tokenize_caption() {
        assert_eq!(
            VocabularyBuilder::new().tokenize_caption("A Cat!"),
            ["SOS", "a", "cat", "EOS"],
        );
    }

    #[test]
    fn test_max_seq_len() {
        let (_, max_seq_len) = VocabularyBuilder::new().build(["a cat", "a dog sat"].iter());
        assert_eq!(max_seq_len, 5);
    }

    #[test]
    fn test_zero_min_occurrences() {
        let error = VocabularyBuilder::new().with_min_occurrences(0).unwrap_err();
        assert_eq!(
            format!("{}", error),
            "The minimum number of occurrences must be at least one",
        );
    }

    #[test]
    fn test_round_trip() {
        let (vocabulary, _) =
            VocabularyBuilder::new().build(["a cat sat on the mat", "a dog ran"].iter());
        for idx in 0..vocabulary.len() as u32 {
            let token = vocabulary.token_at(idx).unwrap();
            assert_eq!(vocabulary.index_of(token).unwrap(), idx);
        }
    }
}
