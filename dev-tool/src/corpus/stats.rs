use std::{collections::HashSet, path::PathBuf};

use anyhow::{Context, Error};
use log::debug;
use structopt::StructOpt;

use caption_dataset::{corpus, Config, CorpusRecord, Dataset, Split};

use crate::{
    exit_code::{NON_FATAL_ERROR, NO_ERROR},
    utils::progress_spin_until_done,
};

/// Prints statistics of an annotations corpus.
#[derive(StructOpt, Debug)]
pub struct StatsCmd {
    /// The base path prepended to the image paths.
    #[structopt(long, default_value = "")]
    base_path: String,

    /// The minimum number of occurrences for a token to enter the vocabulary.
    #[structopt(long, default_value = "1")]
    min_occurrences: usize,

    /// Checks the records for missing captions and duplicated image ids.
    #[structopt(short, long)]
    check: bool,

    /// The json annotations file.
    annotations: PathBuf,
}

impl StatsCmd {
    pub fn run(self) -> Result<i32, Error> {
        let StatsCmd {
            base_path,
            min_occurrences,
            check,
            annotations,
        } = self;

        let records = progress_spin_until_done("Loading annotations", || {
            corpus::from_file(&annotations).context("Loading the annotations corpus failed.")
        })?;
        let total = records.len();
        debug!("Loaded {} records.", total);

        let failures = check.then(|| check_records(&records)).unwrap_or_default();

        let dataset = Dataset::new(
            records,
            Config::new()
                .with_base_path(base_path)
                .with_min_occurrences(min_occurrences),
        )?;

        let recognized = Split::ALL
            .iter()
            .map(|split| dataset.index().size(*split))
            .sum::<usize>();

        println!("Records: {}", total);
        for split in Split::ALL.iter() {
            println!("Items in {}: {}", split, dataset.index().size(*split));
        }
        println!("Dropped records: {}", total - recognized);
        println!("Vocabulary size: {}", dataset.vocabulary().len());
        println!("Max sequence length: {}", dataset.max_seq_len());

        if failures.is_empty() {
            Ok(NO_ERROR)
        } else {
            let mut msg = "Checks Failed:\n".to_owned();
            for failure in &failures {
                msg.push_str("- ");
                msg.push_str(failure);
                msg.push('\n');
            }
            eprintln!("{}", msg);
            Ok(NON_FATAL_ERROR)
        }
    }
}

/// Checks the invariants the records are expected to hold.
fn check_records(records: &[CorpusRecord]) -> Vec<String> {
    let mut failures = Vec::new();
    let mut seen = HashSet::new();
    for record in records {
        if record.captions.is_empty() {
            failures.push(format!("Record {} has no captions.", record.img_id));
        }
        if !seen.insert(record.img_id) {
            failures.push(format!("Image id {} is duplicated.", record.img_id));
        }
    }
    failures
}
