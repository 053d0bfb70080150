use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use labnarrative::{config, init_tracing, parse_summary, Language};

#[derive(Parser)]
#[command(name = "labnarrative", version)]
#[command(about = "Parse a model-written lab summary into JSON test records")]
struct Cli {
    /// Narrative file to parse (reads stdin when omitted)
    input: Option<PathBuf>,
    /// Language the narrative was written in (en, hi)
    #[arg(short, long, env = config::LANGUAGE_ENV, default_value = config::DEFAULT_LANGUAGE)]
    language: Language,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
    /// Keep only tests whose status is low or high
    #[arg(long)]
    flagged_only: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_deref())?;
    let mut summary = parse_summary(&text, cli.language);

    // An empty parse is a data-quality outcome, not an error.
    if summary.tests.is_empty() {
        tracing::warn!(language = %cli.language, "No test sections found in input");
    }
    if cli.flagged_only {
        summary.tests = summary.flagged().cloned().collect();
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&summary)
    } else {
        serde_json::to_string(&summary)
    }
    .context("Failed to serialize parsed summary")?;

    println!("{json}");
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read narrative from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read narrative from stdin")?;
            Ok(text)
        }
    }
}
