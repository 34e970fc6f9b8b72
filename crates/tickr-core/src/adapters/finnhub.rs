use serde::Deserialize;

use crate::adapters::{carries_no_prices, require_field, trim_base_url};
use crate::data_source::QuoteSource;
use crate::http_client::{HttpAuth, HttpRequest};
use crate::{FetchError, ProviderId, Quote, Symbol, UtcDateTime};

pub const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Adapter for Finnhub's `/quote` endpoint.
///
/// Finnhub answers unknown symbols with `200 OK` and an all-zero body, so
/// that shape maps to `NotFound` rather than a zero-priced quote.
#[derive(Debug, Clone)]
pub struct FinnhubAdapter {
    base_url: String,
    auth: HttpAuth,
    timeout_ms: Option<u64>,
}

impl Default for FinnhubAdapter {
    fn default() -> Self {
        Self {
            base_url: String::from(FINNHUB_BASE_URL),
            auth: HttpAuth::None,
            timeout_ms: None,
        }
    }
}

impl FinnhubAdapter {
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

impl QuoteSource for FinnhubAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Finnhub
    }

    fn quote_request(&self, symbol: &Symbol) -> HttpRequest {
        HttpRequest::get(format!("{}/quote", trim_base_url(&self.base_url)))
            .with_query("symbol", symbol.as_str())
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms)
    }

    fn parse_quote(&self, symbol: &Symbol, body: &str) -> Result<Quote, FetchError> {
        let payload: Option<FinnhubQuote> = serde_json::from_str(body)
            .map_err(|e| FetchError::parse(format!("invalid finnhub payload: {e}")))?;

        let Some(payload) = payload else {
            return Err(FetchError::not_found(symbol));
        };

        if carries_no_prices(&[payload.current, payload.open, payload.high, payload.low]) {
            return Err(FetchError::not_found(symbol));
        }

        let provider = self.id();
        let as_of = payload
            .timestamp
            .filter(|seconds| *seconds > 0)
            .map(UtcDateTime::from_unix_seconds)
            .transpose()?;

        Ok(Quote::new(
            symbol.clone(),
            require_field(provider, "c", payload.current)?,
            require_field(provider, "o", payload.open)?,
            require_field(provider, "h", payload.high)?,
            require_field(provider, "l", payload.low)?,
        )?
        .with_previous_close(payload.previous_close)?
        .with_as_of(as_of))
    }
}

#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    #[serde(rename = "c")]
    current: Option<f64>,
    #[serde(rename = "o")]
    open: Option<f64>,
    #[serde(rename = "h")]
    high: Option<f64>,
    #[serde(rename = "l")]
    low: Option<f64>,
    #[serde(rename = "pc")]
    previous_close: Option<f64>,
    #[serde(rename = "t")]
    timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchErrorKind;

    fn aapl() -> Symbol {
        Symbol::parse("AAPL").expect("valid symbol")
    }

    #[test]
    fn builds_quote_url_with_symbol_and_token() {
        let adapter = FinnhubAdapter::new(
            "https://finnhub.test/api/v1/",
            HttpAuth::QueryParam {
                name: String::from("token"),
                value: String::from("k3y"),
            },
        );

        let request = adapter.quote_request(&aapl());
        assert_eq!(
            request.url,
            "https://finnhub.test/api/v1/quote?symbol=AAPL&token=k3y"
        );
    }

    #[test]
    fn parses_full_payload() {
        let body = r#"{"c":150.0,"d":2.0,"dp":1.3514,"h":151.0,"l":147.5,"o":148.0,"pc":148.0,"t":1704067200}"#;
        let quote = FinnhubAdapter::default()
            .parse_quote(&aapl(), body)
            .expect("valid payload");

        assert_eq!(quote.price, 150.0);
        assert_eq!(quote.open, 148.0);
        assert_eq!(quote.day_high, 151.0);
        assert_eq!(quote.day_low, 147.5);
        assert_eq!(quote.previous_close, Some(148.0));
        assert_eq!(
            quote.as_of.map(UtcDateTime::format_rfc3339).as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn all_zero_payload_means_unknown_symbol() {
        let body = r#"{"c":0,"d":null,"dp":null,"h":0,"l":0,"o":0,"pc":0,"t":0}"#;
        let error = FinnhubAdapter::default()
            .parse_quote(&aapl(), body)
            .expect_err("unknown symbol");
        assert_eq!(error.kind(), FetchErrorKind::NotFound);
    }

    #[test]
    fn empty_object_and_null_mean_unknown_symbol() {
        for body in ["{}", "null"] {
            let error = FinnhubAdapter::default()
                .parse_quote(&aapl(), body)
                .expect_err("unknown symbol");
            assert_eq!(error.kind(), FetchErrorKind::NotFound, "body {body}");
        }
    }

    #[test]
    fn partial_payload_is_a_parse_error() {
        let error = FinnhubAdapter::default()
            .parse_quote(&aapl(), r#"{"c":150.0,"h":151.0,"l":147.5}"#)
            .expect_err("open missing");
        assert_eq!(error.kind(), FetchErrorKind::Parse);
        assert!(error.to_string().contains("'o'"));
    }

    #[test]
    fn wrong_types_are_a_parse_error() {
        let error = FinnhubAdapter::default()
            .parse_quote(&aapl(), r#"{"c":"150","o":148.0,"h":151.0,"l":147.5}"#)
            .expect_err("string price");
        assert_eq!(error.kind(), FetchErrorKind::Parse);
    }
}
