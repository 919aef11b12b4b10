use std::process::exit;

use anyhow::Error;
use structopt::StructOpt;

use crate::exit_code::FATAL_ERROR;

mod corpus;
mod exit_code;
mod utils;

/// Tooling for the developers of the captioning dataset.
#[derive(StructOpt, Debug)]
enum CommandArgs {
    Corpus(corpus::CorpusCmd),
}

impl CommandArgs {
    fn run(self) -> Result<i32, Error> {
        match self {
            CommandArgs::Corpus(cmd) => cmd.run(),
        }
    }
}

fn main() {
    env_logger::init();

    let exit_code = match CommandArgs::from_args().run() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{:?}", error);
            FATAL_ERROR
        }
    };

    exit(exit_code);
}
