use std::fs::{self, File};
use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use corpusdex::{config::Config, index_writer, indexer};
use tracing::{error, info};

/// Build the on-disk inverted index from a parser word stream.
#[derive(ClapParser, Debug)]
#[command(name = "indexer", version, about)]
struct Args {
    /// Path to the parser's word-stream output file.
    wordstream_path: std::path::PathBuf,
}

fn main() -> ExitCode {
    corpusdex::logging::init("indexer=info,warn");
    let args = Args::parse();
    let config = Config::default();

    let file = match File::open(&args.wordstream_path) {
        Ok(file) => file,
        Err(err) => {
            error!(path = %args.wordstream_path.display(), %err, "failed to open word stream");
            return ExitCode::FAILURE;
        }
    };

    let built = match indexer::build_index(BufReader::new(file)) {
        Ok(built) => built,
        Err(err) => {
            error!(%err, "failed to build index");
            return ExitCode::FAILURE;
        }
    };
    info!(
        documents = built.doc_ids.len(),
        terms = built.dictionary.len(),
        "word stream consumed"
    );

    if let Err(err) = fs::create_dir_all(&config.data_dir) {
        error!(dir = %config.data_dir.display(), %err, "failed to create data directory");
        return ExitCode::FAILURE;
    }

    let result = index_writer::write_index(
        &built.dictionary,
        &built.doc_ids,
        config.doc_id_path(),
        config.dict_path(),
        config.postings_path(),
    );

    match result {
        Ok(()) => {
            info!(
                terms = built.dictionary.len(),
                documents = built.doc_ids.len(),
                "index flushed"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "failed to flush index");
            ExitCode::FAILURE
        }
    }
}
