use displaydoc::Display;
use log::debug;
use thiserror::Error;

use caption_vocab::{BuilderError, Vocabulary, VocabularyBuilder};

use crate::{
    corpus::{CorpusRecord, Split},
    index::DatasetIndex,
};

/// The potential errors of the dataset.
#[derive(Debug, Display, Error)]
pub enum DatasetError {
    /// Failed to build the vocabulary: {0}
    Vocabulary(#[from] BuilderError),
}

/// The configuration of a caption dataset.
#[derive(Debug)]
pub struct Config {
    pub(crate) base_path: String,
    pub(crate) min_occurrences: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_path: String::new(),
            min_occurrences: 1,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base path prepended to the image paths of the corpus records.
    ///
    /// Defaults to the empty string. The base path is prepended as is, a trailing path
    /// separator has to be part of it.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Sets the minimum number of occurrences for a token to enter the vocabulary.
    ///
    /// Defaults to `1`. Validated when the dataset is created.
    pub fn with_min_occurrences(mut self, min_occurrences: usize) -> Self {
        self.min_occurrences = min_occurrences;
        self
    }
}

/// A captioning dataset with a vocabulary derived from its training captions.
///
/// The dataset is immutable once created and can be shared by concurrent readers without
/// locking.
#[derive(Debug)]
pub struct Dataset {
    index: DatasetIndex,
    vocabulary: Vocabulary,
    max_seq_len: usize,
}

impl Dataset {
    /// Creates a dataset from the corpus records.
    ///
    /// Partitions the records into their dataset splits and derives the vocabulary from the
    /// training captions.
    ///
    /// # Errors
    /// Fails if the configured minimum number of occurrences is invalid.
    pub fn new(
        records: impl IntoIterator<Item = CorpusRecord>,
        config: Config,
    ) -> Result<Self, DatasetError> {
        let builder = VocabularyBuilder::new().with_min_occurrences(config.min_occurrences)?;
        let index = DatasetIndex::from_records(records, &config.base_path);
        let (vocabulary, max_seq_len) = builder.build(index.captions(Split::Train).flatten());
        debug!(
            "Loaded dataset with {} vocabulary words and sequences of at most {} tokens.",
            vocabulary.len(),
            max_seq_len,
        );

        Ok(Dataset {
            index,
            vocabulary,
            max_seq_len,
        })
    }

    /// The dataset index.
    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    /// The vocabulary derived from the training captions.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The maximum length of the tokenized training captions including the start and end
    /// tokens.
    pub fn max_seq_len(&self) -> usize {
        self.max_seq_len
    }
}

#[cfg(test)]
mod tests {
    use caption_vocab::SpecialToken;

    use super::*;

    fn record(path: &str, img_id: u64, captions: &[&str], split: &str) -> CorpusRecord {
        CorpusRecord {
            path: path.into(),
            img_id,
            captions: captions.iter().map(ToString::to_string).collect(),
            split: split.into(),
        }
    }

    #[test]
    fn test_dataset() {
        let records = vec![
            record("1.jpg", 1, &["A Cat!"], "train"),
            record("2.jpg", 2, &["a dog."], "train"),
        ];
        let dataset = Dataset::new(records, Config::new()).unwrap();

        assert_eq!(
            dataset.vocabulary().words(),
            &["EOS", "PAD", "SOS", "UNK", "a", "cat", "dog"][..],
        );
        assert_eq!(dataset.max_seq_len(), 4);
        assert_eq!(dataset.index().size(Split::Train), 2);
    }

    #[test]
    fn test_vocabulary_from_training_captions_only() {
        let records = vec![
            record("1.jpg", 1, &["a cat"], "train"),
            record("2.jpg", 2, &["a zebra"], "val"),
            record("3.jpg", 3, &["a yak"], "test"),
        ];
        let dataset = Dataset::new(records, Config::new()).unwrap();

        assert!(dataset.vocabulary().contains("cat"));
        assert!(!dataset.vocabulary().contains("zebra"));
        assert!(!dataset.vocabulary().contains("yak"));
    }

    #[test]
    fn test_base_path() {
        let records = vec![record("1.jpg", 1, &["a cat"], "train")];
        let config = Config::new().with_base_path("images/");
        let dataset = Dataset::new(records, config).unwrap();

        assert_eq!(
            dataset.index().item(Split::Train, 0).unwrap(),
            ("images/1.jpg", 1),
        );
    }

    #[test]
    fn test_invalid_min_occurrences() {
        let records = vec![record("1.jpg", 1, &["a cat"], "train")];
        let error = Dataset::new(records, Config::new().with_min_occurrences(0)).unwrap_err();
        assert!(matches!(error, DatasetError::Vocabulary(_)));
        assert_eq!(
            format!("{}", error),
            "Failed to build the vocabulary: The minimum number of occurrences must be at least one",
        );
    }

    #[test]
    fn test_special_tokens_reachable() {
        let dataset = Dataset::new(Vec::new(), Config::new()).unwrap();
        let vocabulary = dataset.vocabulary();

        assert_eq!(vocabulary.len(), 4);
        for token in SpecialToken::ALL.iter() {
            let idx = vocabulary.special_idx(*token);
            assert_eq!(vocabulary.token_at(idx).unwrap(), token.as_str());
        }
        assert_eq!(dataset.max_seq_len(), 0);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dataset>();
    }
}
