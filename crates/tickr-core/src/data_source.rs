//! Provider adapter contract.
//!
//! A [`QuoteSource`] knows how one provider shapes its quote endpoint: how
//! to address a symbol and which keys in the JSON payload carry the price
//! fields. Transport is not its concern; [`crate::QuoteFetcher`] executes
//! the request through an [`crate::HttpClient`] and hands the body back.
//!
//! # Example
//!
//! ```rust
//! use tickr_core::{FinnhubAdapter, QuoteSource, Symbol};
//!
//! let adapter = FinnhubAdapter::default();
//! let symbol = Symbol::parse("AAPL").unwrap();
//!
//! let request = adapter.quote_request(&symbol);
//! assert!(request.url.ends_with("/quote?symbol=AAPL"));
//!
//! let quote = adapter
//!     .parse_quote(&symbol, r#"{"c":150.0,"o":148.0,"h":151.0,"l":147.5}"#)
//!     .unwrap();
//! assert_eq!(quote.price, 150.0);
//! ```

use crate::{FetchError, HttpRequest, ProviderId, Quote, Symbol};

/// Request builder and payload parser for one quote provider.
pub trait QuoteSource: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Build the single GET request for `symbol`, credentials included.
    fn quote_request(&self, symbol: &Symbol) -> HttpRequest;

    /// Turn a 2xx response body into a validated quote.
    ///
    /// Returns `NotFound` for well-formed payloads that carry no data for
    /// the symbol and `Parse` for anything malformed or partial.
    fn parse_quote(&self, symbol: &Symbol, body: &str) -> Result<Quote, FetchError>;
}
