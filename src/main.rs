use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use matchlight::{CaseTable, Value};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Case table (JSON)
    #[arg(short = 'c', long, value_name = "FILE")]
    cases: PathBuf,

    /// Value to match (JSON). Read from stdin when omitted
    #[arg(short = 'v', long, value_name = "JSON")]
    value: Option<String>,

    /// Print the index of the matching case instead of its result
    #[arg(short = 'i', long)]
    index: bool,
}

fn main() -> ExitCode {
    // MATCHLIGHT_LOG takes an env-filter directive, e.g. "matchlight=trace".
    if let Ok(filter) = EnvFilter::try_from_env("MATCHLIGHT_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let table_text = fs::read_to_string(&args.cases)
        .with_context(|| format!("Failed to read {}", args.cases.display()))?;
    let table: CaseTable = serde_json::from_str(&table_text)
        .with_context(|| format!("Invalid case table {}", args.cases.display()))?;

    let value_text = match args.value {
        Some(text) => text,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    let json: serde_json::Value =
        serde_json::from_str(&value_text).context("Value is not valid JSON")?;

    let selection = table.select(&Value::from(json))?;
    if args.index {
        match selection.index {
            Some(index) => println!("{index}"),
            None => println!("default"),
        }
    } else {
        println!("{}", selection.result);
    }
    Ok(())
}
