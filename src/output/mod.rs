pub mod style;
pub mod text;

use std::io::Write;

use anyhow::Result;

use crate::{
    cli::{OutputFormat, SessionMode},
    models::{QuoteRecord, ResultSet},
};

/// IEX Trading attribution, required for users of the free API.
const DATA_SOURCE_NOTICE: &str = "Data provided for free by IEX Group Inc.\n\
https://iextrading.com/api-exhibit-a/\n\n\
Realtime quote and/or trade prices are not sourced from all markets.\n";

/// Render every requested ticker in request order. A ticker missing from
/// the results gets one warning on the error stream and the run continues.
pub fn render_quotes(
    out: &mut impl Write,
    err: &mut impl Write,
    format: OutputFormat,
    mode: SessionMode,
    tickers: &[String],
    results: &ResultSet,
) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(results)?)?;
    }

    for ticker in tickers {
        let Some(raw) = results.get(ticker) else {
            writeln!(err, "Stock data missing for '{}'\n", ticker)?;
            continue;
        };

        match format {
            OutputFormat::Simple => {
                writeln!(out, "{}", text::simple_line(ticker, &QuoteRecord::from_raw(raw)))?;
            }
            OutputFormat::Text => {
                write!(out, "{}", text::quote_block(ticker, &QuoteRecord::from_raw(raw), mode))?;
            }
            // The full dump above already covers json output.
            OutputFormat::Json => {}
        }
    }

    if format != OutputFormat::Simple {
        writeln!(out, "{}", DATA_SOURCE_NOTICE)?;
    }

    Ok(())
}
