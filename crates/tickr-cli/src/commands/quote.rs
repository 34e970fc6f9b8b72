use std::time::Instant;

use tracing::info;

use tickr_core::{Quote, QuoteFetcher, Symbol};

use crate::error::CliError;

pub fn run(fetcher: &QuoteFetcher, symbol: &Symbol) -> Result<Quote, CliError> {
    let started = Instant::now();
    let quote = fetcher.fetch(symbol)?;
    info!(
        provider = %fetcher.provider(),
        %symbol,
        price = quote.price,
        elapsed = ?started.elapsed(),
        "quote fetched"
    );
    Ok(quote)
}
