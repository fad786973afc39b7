//! The `typomatch` command line tool.
//!
//! Scores string pairs, checks a single pair against a threshold or ranks a
//! candidate file. `-v`/`-q` pick the log level; `RUST_LOG` refines it.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use typomatch::cli::args::TypoArgs;
use typomatch::cli::commands::execute_command;

fn main() {
    let args = TypoArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info, // skipped algorithms, corpus loading
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        // RUST_LOG=typomatch=trace shows every scored candidate
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
