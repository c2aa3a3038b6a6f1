use std::convert::Infallible;
use std::io::{IsTerminal, stdout};

use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Dump the raw provider response, indented and key-sorted
    Json,
    /// One TICKER:price line per symbol
    Simple,
    /// Multi-line colorized block per symbol
    Text,
}

/// Whether output may carry ANSI color. Resolved once per run and passed
/// down explicitly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionMode {
    Interactive,
    Batch,
}

#[derive(Debug, Parser)]
#[command(name = "stock-quote", version, about = "Display near-realtime stock quotes on the console")]
pub struct Cli {
    /// Run in batch mode (no color)
    #[arg(short = 'b', long)]
    pub batch: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Ticker symbols to look up
    #[arg(required = true, value_name = "TICKER", value_parser = uppercase_ticker)]
    pub tickers: Vec<String>,
}

impl Cli {
    /// Interactive unless forced off or stdout is not a terminal.
    pub fn session_mode(&self) -> SessionMode {
        if self.batch || !stdout().is_terminal() {
            SessionMode::Batch
        } else {
            SessionMode::Interactive
        }
    }
}

fn uppercase_ticker(arg: &str) -> Result<String, Infallible> {
    Ok(arg.to_uppercase())
}
