//! CLI argument definitions for tickr.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `SYMBOL` | prompt | Ticker to look up |
//! | `--provider` | `TICKR_PROVIDER` or `finnhub` | Quote provider |
//! | `--base-url` | provider default | Endpoint root override |
//! | `--key-placement` | `TICKR_API_KEY_PLACEMENT` or `query` | Where the API key goes |
//! | `--timeout-ms` | client default | Request timeout |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `-v` | off | Log verbosity (repeat for more) |
//!
//! # Examples
//!
//! ```bash
//! tickr AAPL
//! tickr msft --format json --pretty
//! TICKR_API_KEY=... tickr AAPL --key-placement header -vv
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use tickr_core::{KeyPlacement, ProviderId};

/// Look up the latest quote for a stock symbol.
///
/// The API key is read from TICKR_API_KEY (or FINNHUB_API_KEY), never from
/// the command line. A `.env` file in the working directory is honored.
#[derive(Debug, Parser)]
#[command(name = "tickr", author, version, about = "Look up the latest quote for a stock symbol")]
pub struct Cli {
    /// Ticker symbol (e.g., AAPL). Prompted for when omitted.
    pub symbol: Option<String>,

    /// Quote provider to query.
    #[arg(long, value_enum)]
    pub provider: Option<ProviderSelector>,

    /// Override the provider endpoint root (e.g., a local gateway).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Send the API key as a query parameter or a header.
    #[arg(long, value_enum)]
    pub key_placement: Option<KeyPlacementSelector>,

    /// Request timeout in milliseconds; the HTTP client default applies otherwise.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Output format for the quote.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// Serialized quote object.
    Json,
}

/// Provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderSelector {
    /// Finnhub `/quote` endpoint.
    Finnhub,
    /// Yahoo-style `v7/finance/quote` endpoint.
    Yahoo,
}

impl From<ProviderSelector> for ProviderId {
    fn from(value: ProviderSelector) -> Self {
        match value {
            ProviderSelector::Finnhub => Self::Finnhub,
            ProviderSelector::Yahoo => Self::Yahoo,
        }
    }
}

/// API key placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyPlacementSelector {
    Query,
    Header,
}

impl From<KeyPlacementSelector> for KeyPlacement {
    fn from(value: KeyPlacementSelector) -> Self {
        match value {
            KeyPlacementSelector::Query => Self::Query,
            KeyPlacementSelector::Header => Self::Header,
        }
    }
}
