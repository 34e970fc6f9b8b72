use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::data_source::QuoteSource;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::{FetchError, FetcherConfig, ProviderId, Quote, Symbol};

/// Fetches a single quote with one blocking GET.
///
/// Holds no state between calls: identical responses yield equal quotes.
pub struct QuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    source: Box<dyn QuoteSource>,
}

impl QuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, source: Box<dyn QuoteSource>) -> Self {
        Self {
            http_client,
            source,
        }
    }

    /// Fetcher backed by the reqwest transport and the configured provider.
    pub fn from_config(config: &FetcherConfig) -> Result<Self, FetchError> {
        let http_client = ReqwestHttpClient::new().map_err(|e| FetchError::network(e.message()))?;
        Ok(Self::new(Arc::new(http_client), config.source()))
    }

    pub fn provider(&self) -> ProviderId {
        self.source.id()
    }

    pub fn fetch(&self, symbol: &Symbol) -> Result<Quote, FetchError> {
        let provider = self.source.id();
        let request = self.source.quote_request(symbol);
        debug!(%provider, %symbol, url = %request.redacted_url(), "requesting quote");

        let started = Instant::now();
        let response = self.http_client.execute(request).map_err(|error| {
            warn!(%provider, %symbol, error = %error, "quote transport failed");
            FetchError::network(error.message())
        })?;
        debug!(
            %provider,
            %symbol,
            status = response.status,
            latency_ms = whole_millis(started.elapsed()),
            "quote response received"
        );

        if !response.is_success() {
            warn!(%provider, %symbol, status = response.status, "quote request rejected");
            return Err(FetchError::request(response.status));
        }

        self.source
            .parse_quote(symbol, &response.body)
            .inspect_err(|error| {
                warn!(%provider, %symbol, code = error.code(), error = %error, "quote payload unusable");
            })
    }
}

/// Saturates instead of truncating the `u128` millisecond count.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
