#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! A dataset for image captioning models.
//!
//! The dataset is loaded from a json annotations corpus. The corpus records are partitioned
//! into the train, validation and test splits and a vocabulary is derived from the training
//! captions. Records with an unrecognized split label are dropped. The loaded dataset is
//! read-only and hands out the image path and image id pairs under which a collaborator
//! resolves the actual image bytes or precalculated features.
//!
//! ```no_run
//! use caption_dataset::{corpus, Config, Dataset, Split};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = corpus::from_file("annotations.json")?;
//!     let dataset = Dataset::new(
//!         records,
//!         Config::new()
//!             .with_base_path("images/")
//!             .with_min_occurrences(5),
//!     )?;
//!
//!     let (image_path, image_id) = dataset.index().item(Split::Train, 0)?;
//!     let vocabulary_size = dataset.vocabulary().len();
//!
//!     Ok(())
//! }
//! ```

pub mod corpus;
mod dataset;
mod index;

pub use crate::{
    corpus::{CorpusError, CorpusRecord, Split},
    dataset::{Config, Dataset, DatasetError},
    index::{DatasetIndex, DatasetItem, IndexError},
};
