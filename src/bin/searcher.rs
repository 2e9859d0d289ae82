use std::process::ExitCode;

use clap::Parser as ClapParser;
use corpusdex::{config::Config, error::Error, query::Searcher};
use tracing::{error, info};

/// Evaluate a conjunctive keyword query against an on-disk index.
#[derive(ClapParser, Debug)]
#[command(name = "searcher", version, about)]
struct Args {
    /// One or more query words (all must match; see the module docs
    /// for the conjunctive-query contract).
    #[arg(required = true)]
    words: Vec<String>,
}

/// `clap`'s `required = true` only guarantees at least one argument was
/// given, not that it is non-blank; an empty query term can never match
/// a stemmed dictionary key, so reject it here rather than silently
/// returning an empty result a user would mistake for "no match".
fn validate(words: &[String]) -> Result<(), Error> {
    if words.iter().any(|word| word.trim().is_empty()) {
        return Err(Error::invalid_argument("query words must not be blank"));
    }
    Ok(())
}

fn main() -> ExitCode {
    corpusdex::logging::init("searcher=info,warn");
    let args = Args::parse();

    if let Err(err) = validate(&args.words) {
        error!(words = ?args.words, %err, "invalid query arguments");
        return ExitCode::FAILURE;
    }

    let config = Config::default();

    let mut searcher = match Searcher::open(&config) {
        Ok(searcher) => searcher,
        Err(err) => {
            error!(dir = %config.data_dir.display(), %err, "failed to open index");
            return ExitCode::FAILURE;
        }
    };

    info!(terms = ?args.words, "query normalized and dispatched");

    let results = match searcher.search(&args.words) {
        Ok(results) => results,
        Err(err) => {
            error!(%err, "query failed");
            return ExitCode::FAILURE;
        }
    };

    info!(hits = results.len(), "query complete");
    for result in &results {
        println!("{result}");
    }

    ExitCode::SUCCESS
}
