use std::collections::HashMap;

use displaydoc::Display;
use thiserror::Error;

use crate::special::SpecialToken;

/// A mapping between caption tokens and dense vocabulary indices.
///
/// The vocabulary is immutable and contains only owned data, it can be shared by concurrent
/// readers without locking.
#[derive(Debug)]
pub struct Vocabulary {
    word2idx: HashMap<String, u32>,
    idx2word: Vec<String>,
    special_ids: [u32; 4],
}

/// The potential errors of the vocabulary.
#[derive(Debug, Display, Error)]
pub enum VocabularyError {
    /// Missing the token in the vocabulary: {0}
    UnknownToken(String),
    /// Missing the index in the vocabulary: {0}
    UnknownIndex(u32),
}

impl Vocabulary {
    /// Creates the vocabulary from the word list, the positions become the indices.
    ///
    /// The words must be unique and include all reserved tokens.
    pub(crate) fn new(idx2word: Vec<String>) -> Self {
        let word2idx = idx2word
            .iter()
            .enumerate()
            .map(|(idx, word)| (word.clone(), idx as u32))
            .collect::<HashMap<_, _>>();
        let special_ids = SpecialToken::ALL.map(|token| word2idx[token.as_str()]);

        Vocabulary {
            word2idx,
            idx2word,
            special_ids,
        }
    }

    /// The number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.idx2word.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.idx2word.is_empty()
    }

    /// The words of the vocabulary in index order.
    pub fn words(&self) -> &[String] {
        &self.idx2word
    }

    /// Whether the vocabulary contains the token.
    pub fn contains(&self, token: impl AsRef<str>) -> bool {
        self.word2idx.contains_key(token.as_ref())
    }

    /// The index of the token.
    ///
    /// Unknown tokens are never substituted, callers have to map them to
    /// [`SpecialToken::Unknown`] themselves.
    ///
    /// # Errors
    /// Fails if the token is missing from the vocabulary.
    pub fn index_of(&self, token: impl AsRef<str>) -> Result<u32, VocabularyError> {
        let token = token.as_ref();
        self.word2idx
            .get(token)
            .copied()
            .ok_or_else(|| VocabularyError::UnknownToken(token.into()))
    }

    /// The token at the index.
    ///
    /// # Errors
    /// Fails if the index is missing from the vocabulary.
    pub fn token_at(&self, idx: u32) -> Result<&str, VocabularyError> {
        self.idx2word
            .get(idx as usize)
            .map(String::as_str)
            .ok_or(VocabularyError::UnknownIndex(idx))
    }

    /// The index of the reserved token.
    pub fn special_idx(&self, token: SpecialToken) -> u32 {
        self.special_ids[token as usize]
    }
}
