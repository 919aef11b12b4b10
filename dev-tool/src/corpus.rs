#![cfg(not(tarpaulin))]
use anyhow::Error;
use structopt::StructOpt;

use self::{stats::StatsCmd, vocab::VocabCmd};

mod stats;
mod vocab;

/// Commands related to the annotations corpus (stats, vocab).
#[derive(StructOpt, Debug)]
pub enum CorpusCmd {
    Stats(StatsCmd),
    Vocab(VocabCmd),
}

impl CorpusCmd {
    pub fn run(self) -> Result<i32, Error> {
        use CorpusCmd::*;
        match self {
            Stats(cmd) => cmd.run(),
            Vocab(cmd) => cmd.run(),
        }
    }
}
