//! # tickr core
//!
//! Single-symbol stock quote lookup: one request, one response, one quote.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Finnhub, Yahoo-style) |
//! | [`config`] | Environment-driven fetcher configuration |
//! | [`data_source`] | Adapter contract ([`QuoteSource`]) |
//! | [`domain`] | Domain models ([`Quote`], [`Symbol`], [`UtcDateTime`]) |
//! | [`error`] | Fetch, validation and configuration errors |
//! | [`fetcher`] | [`QuoteFetcher`], the request/response core |
//! | [`http_client`] | Blocking HTTP transport seam |
//! | [`source`] | Provider identifiers |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tickr_core::{FetcherConfig, QuoteFetcher, Symbol};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FetcherConfig::from_env()?;
//!     let fetcher = QuoteFetcher::from_config(&config)?;
//!
//!     let quote = fetcher.fetch(&Symbol::parse("AAPL")?)?;
//!     println!("{quote}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │ Symbol
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  QuoteFetcher   │────▶│ HTTP Client      │
//! │                 │     │ (reqwest/mock)   │
//! └────────┬────────┘     └──────────────────┘
//!          │ body
//!          ▼
//! ┌─────────────────┐
//! │ QuoteSource     │
//! │ (adapter)       │
//! └────────┬────────┘
//!          ▼
//!        Quote
//! ```
//!
//! ## Error Handling
//!
//! Every failure is terminal; nothing is retried:
//!
//! ```rust
//! use tickr_core::{FetchError, FetchErrorKind};
//!
//! fn describe(error: &FetchError) -> &'static str {
//!     match error.kind() {
//!         FetchErrorKind::Network => "could not reach the provider",
//!         FetchErrorKind::Request => "provider rejected the request",
//!         FetchErrorKind::NotFound => "unknown symbol",
//!         FetchErrorKind::Parse => "unreadable response",
//!     }
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod source;

pub use adapters::{FinnhubAdapter, YahooAdapter};

pub use config::{FetcherConfig, KeyPlacement};

pub use data_source::QuoteSource;

pub use domain::{Quote, Symbol, UtcDateTime};

pub use error::{ConfigError, FetchError, FetchErrorKind, ValidationError};

pub use fetcher::QuoteFetcher;

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use source::ProviderId;
