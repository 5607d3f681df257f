//! # hangstats CLI
//!
//! Command-line interface for the hangstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{error, info};

use hangstats::archive::HangoutsArchive;
use hangstats::cli::Args;
use hangstats::format::write_snapshot;
use hangstats::{HangstatsError, logging};

fn main() {
    let args = <Args as ClapParser>::parse();
    logging::init(args.log_level);
    info!("started hangstats v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), HangstatsError> {
    let start = Instant::now();

    let archive = HangoutsArchive::from_path(&args.file_path, &args.archive_config())?;
    if archive.skipped() > 0 {
        info!("skipped {} malformed conversations", archive.skipped());
    }

    let output_config = args.output_config();
    let mut total_messages = 0;

    for record in archive.conversations() {
        let conv = hangstats::ConversationAggregator::aggregate(record);
        total_messages += conv.total_message_count();

        if !args.no_summary {
            println!("{}", conv.summary());
        }

        if !args.no_serialize {
            write_snapshot(&conv.export(), &output_config)?;
        }
    }

    info!(
        conversations = archive.len(),
        messages = total_messages,
        elapsed_secs = start.elapsed().as_secs_f64(),
        "finished parsing conversations"
    );

    Ok(())
}
