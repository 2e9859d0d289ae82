use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use corpusdex::markup;
use tracing::{error, info};

/// Tokenize a tagged corpus into the word-stream format the indexer consumes.
#[derive(ClapParser, Debug)]
#[command(name = "parser", version, about)]
struct Args {
    /// Path to the tagged corpus file.
    path: std::path::PathBuf,
}

fn main() -> ExitCode {
    corpusdex::logging::init("parser=info,warn");
    let args = Args::parse();

    let text = match fs::read_to_string(&args.path) {
        Ok(text) => text,
        Err(err) => {
            error!(path = %args.path.display(), %err, "failed to open corpus");
            return ExitCode::FAILURE;
        }
    };
    info!(path = %args.path.display(), bytes = text.len(), "corpus opened");

    let documents = markup::parse_corpus(&text);
    info!(documents = documents.len(), "corpus parsed");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = markup::write_word_stream(&documents, &mut handle) {
        error!(%err, "failed to write word stream");
        return ExitCode::FAILURE;
    }
    let _ = handle.flush();

    ExitCode::SUCCESS
}
