mod quote;

use std::io::{self, BufRead, Write};

use tickr_core::{FetcherConfig, QuoteFetcher, Symbol};

use crate::cli::Cli;
use crate::error::CliError;
use crate::{output, prompt};

pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = apply_overrides(cli, FetcherConfig::from_env()?)?;
    let fetcher = QuoteFetcher::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli, &fetcher, &mut stdin.lock(), &mut stdout.lock())
}

/// Command-line flags take precedence over environment values.
fn apply_overrides(cli: &Cli, mut config: FetcherConfig) -> Result<FetcherConfig, CliError> {
    if let Some(provider) = cli.provider {
        config = config.with_provider(provider.into());
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }
    if let Some(placement) = cli.key_placement {
        config = config.with_key_placement(placement.into());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }
    Ok(config)
}

fn execute<R, W>(
    cli: &Cli,
    fetcher: &QuoteFetcher,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let raw = match &cli.symbol {
        Some(raw) => raw.clone(),
        None => prompt::read_symbol(input, out)?,
    };
    let symbol = Symbol::parse(&raw)?;

    let quote = quote::run(fetcher, &symbol)?;
    output::render(out, &quote, cli.format, cli.pretty)
}
