use clap::Parser;
use log::{info, warn};
use std::io;
use std::path::PathBuf;
use std::process;
use support_bank::{AppError, Command, Format, IngestConfig, Ingestor, Ledger, LogObserver, Policy, Session};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Delimited file of transactions; the first line is a header
    input: PathBuf,
    /// How to treat malformed records
    #[arg(long, value_enum, default_value_t = Policy::Tolerant)]
    policy: Policy,
    /// Field separator, a single character
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: char,
    /// Run a single command (e.g. "list all") instead of prompting
    #[arg(short, long)]
    command: Option<String>,
    /// Report layout
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {:?}", s)),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = IngestConfig {
        policy: cli.policy,
        delimiter: cli.delimiter,
    };

    // The ledger is fully built before any query runs.
    let ingestor = Ingestor::from_path(&cli.input, config, LogObserver)?;
    let ledger = Ledger::build(ingestor)?;
    if ledger.is_empty() {
        warn!("No transactions were loaded from {}", cli.input.display());
    } else {
        info!("Loaded {} accounts", ledger.len());
    }
    let session = Session::new(&ledger, cli.format);

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(text) => {
            let command = Command::parse(text)?;
            session.execute(&command, &mut stdout)
        }
        None => session.run_prompt(io::stdin().lock(), &mut stdout),
    }
}
