use displaydoc::Display;
use log::debug;
use thiserror::Error;

use crate::corpus::{CorpusRecord, Split};

/// The potential errors of the dataset index.
#[derive(Debug, Display, Error)]
pub enum IndexError {
    /// Out of bounds item index {index} for the {split} split of size {size}
    OutOfBounds {
        split: Split,
        index: usize,
        size: usize,
    },
}

/// An image annotation prepared for a dataset split.
#[derive(Clone, Debug)]
pub struct DatasetItem {
    /// The image path, base path included.
    pub image_path: String,
    /// The image id, unique across all splits.
    pub image_id: u64,
    /// The captions describing the image, in corpus order.
    pub captions: Vec<String>,
}

/// An index of the corpus records partitioned into the dataset splits.
///
/// The index is immutable and contains only owned data, it can be shared by concurrent readers
/// without locking.
#[derive(Debug)]
pub struct DatasetIndex {
    train: Vec<DatasetItem>,
    validation: Vec<DatasetItem>,
    test: Vec<DatasetItem>,
}

impl DatasetIndex {
    /// Partitions the corpus records into their dataset splits.
    ///
    /// The image paths are resolved by prepending the base path to the record paths as is,
    /// no path separator is inserted. Records with an unrecognized split label are dropped.
    pub fn from_records(
        records: impl IntoIterator<Item = CorpusRecord>,
        base_path: &str,
    ) -> Self {
        let mut index = DatasetIndex {
            train: Vec::new(),
            validation: Vec::new(),
            test: Vec::new(),
        };
        let mut dropped = 0;
        for record in records {
            let split = match Split::from_label(&record.split) {
                Some(split) => split,
                None => {
                    dropped += 1;
                    continue;
                }
            };
            index.items_mut(split).push(DatasetItem {
                image_path: format!("{}{}", base_path, record.path),
                image_id: record.img_id,
                captions: record.captions,
            });
        }
        debug!(
            "Indexed {} train, {} val and {} test items ({} dropped).",
            index.size(Split::Train),
            index.size(Split::Validation),
            index.size(Split::Test),
            dropped,
        );

        index
    }

    fn items_mut(&mut self, split: Split) -> &mut Vec<DatasetItem> {
        match split {
            Split::Train => &mut self.train,
            Split::Validation => &mut self.validation,
            Split::Test => &mut self.test,
        }
    }

    /// The items of the split in corpus order.
    pub fn items(&self, split: Split) -> &[DatasetItem] {
        match split {
            Split::Train => &self.train,
            Split::Validation => &self.validation,
            Split::Test => &self.test,
        }
    }

    /// The number of items in the split.
    pub fn size(&self, split: Split) -> usize {
        self.items(split).len()
    }

    /// The image path and image id of the item at the index of the split.
    ///
    /// # Errors
    /// Fails if the index is out of bounds for the split.
    pub fn item(&self, split: Split, index: usize) -> Result<(&str, u64), IndexError> {
        let items = self.items(split);
        items
            .get(index)
            .map(|item| (item.image_path.as_str(), item.image_id))
            .ok_or(IndexError::OutOfBounds {
                split,
                index,
                size: items.len(),
            })
    }

    /// The caption lists of the split, one per item in corpus order.
    ///
    /// The captions are handed out as annotated, unnormalized.
    pub fn captions(&self, split: Split) -> impl Iterator<Item = &[String]> {
        self.items(split).iter().map(|item| item.captions.as_slice())
    }
}
