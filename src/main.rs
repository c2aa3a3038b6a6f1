use std::io::{stderr, stdout};
use std::process;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use stock_quote::{api::iex, cli::Cli, output};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage, help and option errors all go to stderr with a
            // non-zero exit.
            eprint!("{}", err.render());
            process::exit(1);
        }
    };

    let mode = cli.session_mode();
    let client = Client::new();

    let results = iex::download_quotes(&client, &cli.tickers).await;
    output::render_quotes(
        &mut stdout().lock(),
        &mut stderr().lock(),
        cli.format,
        mode,
        &cli.tickers,
        &results,
    )?;

    Ok(())
}
