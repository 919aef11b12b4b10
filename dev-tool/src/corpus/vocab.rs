use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Error};
use structopt::StructOpt;

use caption_dataset::{corpus, Config, Dataset};

use crate::{exit_code::NO_ERROR, utils::progress_spin_until_done};

/// Dumps the vocabulary derived from the training captions of an annotations corpus.
#[derive(StructOpt, Debug)]
pub struct VocabCmd {
    /// The minimum number of occurrences for a token to enter the vocabulary.
    #[structopt(long, default_value = "1")]
    min_occurrences: usize,

    /// Writes the vocabulary to a file as a json word list instead of printing it.
    #[structopt(long)]
    json: Option<PathBuf>,

    /// The json annotations file.
    annotations: PathBuf,
}

impl VocabCmd {
    pub fn run(self) -> Result<i32, Error> {
        let VocabCmd {
            min_occurrences,
            json,
            annotations,
        } = self;

        let records = progress_spin_until_done("Loading annotations", || {
            corpus::from_file(&annotations).context("Loading the annotations corpus failed.")
        })?;

        let dataset = Dataset::new(records, Config::new().with_min_occurrences(min_occurrences))?;
        let vocabulary = dataset.vocabulary();

        if let Some(out) = json {
            let writer = BufWriter::new(File::create(&out)?);
            serde_json::to_writer_pretty(writer, vocabulary.words())?;
            println!("Wrote {} words to {}.", vocabulary.len(), out.display());
        } else {
            for (idx, word) in vocabulary.words().iter().enumerate() {
                println!("{:>6} {}", idx, word);
            }
        }

        Ok(NO_ERROR)
    }
}
