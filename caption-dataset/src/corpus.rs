//! The raw annotations corpus.

use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use displaydoc::Display;
use serde::Deserialize;
use thiserror::Error;

/// The potential errors of the corpus.
#[derive(Debug, Display, Error)]
pub enum CorpusError {
    /// Failed to read the annotations: {0}
    Io(#[from] std::io::Error),
    /// Failed to parse the annotations: {0}
    Json(#[from] serde_json::Error),
}

/// A raw image annotation of the corpus.
#[derive(Clone, Debug, Deserialize)]
pub struct CorpusRecord {
    /// The image path relative to the image base path.
    pub path: String,
    /// The image id, unique across all splits.
    pub img_id: u64,
    /// The captions describing the image, at least one is expected.
    pub captions: Vec<String>,
    /// The raw split label.
    pub split: String,
}

/// The recognized dataset splits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    /// All recognized splits.
    pub const ALL: [Split; 3] = [Split::Train, Split::Validation, Split::Test];

    /// Parses a raw split label, `None` if the label is unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "train" => Some(Split::Train),
            "val" => Some(Split::Validation),
            "test" => Some(Split::Test),
            _ => None,
        }
    }

    /// The split label.
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "val",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the corpus records from a json annotations file.
///
/// # Errors
/// Fails if the file can't be read or doesn't hold a json array of records. No partial corpus
/// is returned.
pub fn from_file(annotations: impl AsRef<Path>) -> Result<Vec<CorpusRecord>, CorpusError> {
    from_reader(BufReader::new(File::open(annotations)?))
}

/// Parses the corpus records from a json reader.
///
/// # Errors
/// Fails if the reader doesn't hold a json array of records. No partial corpus is returned.
pub fn from_reader(annotations: impl Read) -> Result<Vec<CorpusRecord>, CorpusError> {
    serde_json::from_reader(annotations).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANNOTATIONS: &str = r#"[
        {"path": "1.jpg", "img_id": 1, "captions": ["A Cat!"], "split": "train"},
        {"path": "2.jpg", "img_id": 2, "captions": ["a dog.", "the dog"], "split": "val"}
    ]"#;

    #[test]
    fn test_from_reader() {
        let records = from_reader(ANNOTATIONS.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path, "1.jpg");
        assert_eq!(records[0].img_id, 1);
        assert_eq!(records[0].captions, ["A Cat!"]);
        assert_eq!(records[0].split, "train");
        assert_eq!(records[1].captions, ["a dog.", "the dog"]);
    }

    #[test]
    fn test_from_reader_bad_json() {
        let error = from_reader("no records".as_bytes()).unwrap_err();
        assert!(matches!(error, CorpusError::Json(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let error = from_file("no/such/annotations.json").unwrap_err();
        assert!(matches!(error, CorpusError::Io(_)));
    }

    #[test]
    fn test_split_labels() {
        for split in Split::ALL.iter() {
            assert_eq!(Split::from_label(split.as_str()), Some(*split));
        }
        assert_eq!(Split::from_label("validation"), None);
        assert_eq!(Split::from_label("Train"), None);
        assert_eq!(Split::from_label(""), None);
    }
}
