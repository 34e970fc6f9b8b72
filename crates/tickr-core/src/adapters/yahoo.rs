use serde::Deserialize;

use crate::adapters::{carries_no_prices, require_field, trim_base_url};
use crate::data_source::QuoteSource;
use crate::http_client::{HttpAuth, HttpRequest};
use crate::{FetchError, ProviderId, Quote, Symbol, UtcDateTime};

pub const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Adapter for the Yahoo-style `v7/finance/quote` endpoint.
///
/// Yahoo's public host expects a session cookie and crumb; point
/// `base_url` at a compatible gateway when those are handled elsewhere.
#[derive(Debug, Clone)]
pub struct YahooAdapter {
    base_url: String,
    auth: HttpAuth,
    timeout_ms: Option<u64>,
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self {
            base_url: String::from(YAHOO_BASE_URL),
            auth: HttpAuth::None,
            timeout_ms: None,
        }
    }
}

impl YahooAdapter {
    pub fn new(base_url: impl Into<String>, auth: HttpAuth) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
            ..Self::default()
        }
    }

    pub fn with_auth(mut self, auth: HttpAuth) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl QuoteSource for YahooAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn quote_request(&self, symbol: &Symbol) -> HttpRequest {
        HttpRequest::get(format!(
            "{}/v7/finance/quote",
            trim_base_url(&self.base_url)
        ))
        .with_query("symbols", symbol.as_str())
        .with_header("referer", "https://finance.yahoo.com/")
        .with_auth(&self.auth)
        .with_timeout_ms(self.timeout_ms)
    }

    fn parse_quote(&self, symbol: &Symbol, body: &str) -> Result<Quote, FetchError> {
        let response: Option<YahooQuoteResponse> = serde_json::from_str(body)
            .map_err(|e| FetchError::parse(format!("invalid yahoo payload: {e}")))?;

        let Some(data) = response.and_then(|response| response.quote_response) else {
            return Err(FetchError::not_found(symbol));
        };

        if data.error.as_ref().is_some_and(|error| !error.is_null()) {
            return Err(FetchError::not_found(symbol));
        }

        let Some(entry) = data.result.into_iter().find(|entry| {
            entry
                .symbol
                .as_deref()
                .is_some_and(|returned| returned.eq_ignore_ascii_case(symbol.as_str()))
        }) else {
            return Err(FetchError::not_found(symbol));
        };

        if carries_no_prices(&[
            entry.regular_market_price,
            entry.regular_market_open,
            entry.regular_market_day_high,
            entry.regular_market_day_low,
        ]) {
            return Err(FetchError::not_found(symbol));
        }

        let provider = self.id();
        let as_of = entry
            .regular_market_time
            .filter(|seconds| *seconds > 0)
            .map(UtcDateTime::from_unix_seconds)
            .transpose()?;

        Ok(Quote::new(
            symbol.clone(),
            require_field(provider, "regularMarketPrice", entry.regular_market_price)?,
            require_field(provider, "regularMarketOpen", entry.regular_market_open)?,
            require_field(provider, "regularMarketDayHigh", entry.regular_market_day_high)?,
            require_field(provider, "regularMarketDayLow", entry.regular_market_day_low)?,
        )?
        .with_previous_close(entry.regular_market_previous_close)?
        .with_name(entry.short_name.or(entry.long_name))
        .with_as_of(as_of))
    }
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: Option<YahooQuoteResponseData>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResponseData {
    #[serde(default)]
    result: Vec<YahooQuoteData>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooQuoteData {
    symbol: Option<String>,
    regular_market_price: Option<f64>,
    regular_market_open: Option<f64>,
    regular_market_day_high: Option<f64>,
    regular_market_day_low: Option<f64>,
    regular_market_previous_close: Option<f64>,
    regular_market_time: Option<i64>,
    short_name: Option<String>,
    long_name: Option<String>,
}
