#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! A caption vocabulary which maps tokens to dense indices.
//!
//! The vocabulary is derived from the training captions of an image captioning corpus and
//! consists of a caption normalizer, a whitespace tokenizer and a frequency filter. Tokens
//! which occur often enough are retained, sorted lexicographically and assigned dense indices.
//! The reserved tokens for padding, caption start, caption end and unknown words are always
//! part of the vocabulary.
//!
//! The normalizer is not configurable:
//! - Lowercases characters and trims surrounding whitespace.
//! - Isolates non-alphanumeric symbols by whitespace so they get split.
//! - Removes punctuation.
//!
//! The builder is configurable by:
//! - The minimum number of occurrences for a token to be retained.
//!
//! ```no_run
//! use caption_vocab::{SpecialToken, VocabularyBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let captions = ["A cat sat on the mat.", "A cat ran."];
//!     let (vocabulary, max_seq_len) = VocabularyBuilder::new()
//!         .with_min_occurrences(2)?
//!         .build(captions.iter());
//!
//!     let cat = vocabulary.index_of("cat")?;
//!     let pad = vocabulary.special_idx(SpecialToken::Pad);
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod normalizer;
mod special;
mod tokenizer;
mod vocabulary;

pub use crate::{
    builder::{BuilderError, VocabularyBuilder},
    normalizer::Normalizer,
    special::SpecialToken,
    tokenizer::Tokenizer,
    vocabulary::{Vocabulary, VocabularyError},
};
