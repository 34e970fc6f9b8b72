//! Fetcher configuration.
//!
//! Values come from the environment and can be overridden by the caller
//! (the CLI applies its flags on top):
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TICKR_PROVIDER` | `finnhub` | `finnhub` or `yahoo` |
//! | `TICKR_BASE_URL` | provider default | Endpoint root override |
//! | `TICKR_API_KEY` | unset | Provider key (`FINNHUB_API_KEY` also read for Finnhub) |
//! | `TICKR_API_KEY_PLACEMENT` | `query` | `query` or `header` |
//! | `TICKR_TIMEOUT_MS` | client default | Per-request timeout |
//!
//! The API key is resolved against the final provider, so `FINNHUB_API_KEY`
//! is only ever sent to Finnhub. The API key is never logged.

use std::env;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use crate::adapters::{FinnhubAdapter, YahooAdapter};
use crate::data_source::QuoteSource;
use crate::http_client::HttpAuth;
use crate::{ConfigError, ProviderId};

pub const ENV_PROVIDER: &str = "TICKR_PROVIDER";
pub const ENV_BASE_URL: &str = "TICKR_BASE_URL";
pub const ENV_API_KEY: &str = "TICKR_API_KEY";
pub const ENV_FINNHUB_API_KEY: &str = "FINNHUB_API_KEY";
pub const ENV_KEY_PLACEMENT: &str = "TICKR_API_KEY_PLACEMENT";
pub const ENV_TIMEOUT_MS: &str = "TICKR_TIMEOUT_MS";

/// Where the API key travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPlacement {
    #[default]
    Query,
    Header,
}

impl FromStr for KeyPlacement {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "header" => Ok(Self::Header),
            other => Err(ConfigError::InvalidKeyPlacement {
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct FetcherConfig {
    pub provider: ProviderId,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// Vendor-named key, used only when the provider is Finnhub.
    pub finnhub_api_key: Option<String>,
    pub key_placement: KeyPlacement,
    pub timeout_ms: Option<u64>,
}

impl Debug for FetcherConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("finnhub_api_key", &self.finnhub_api_key.as_ref().map(|_| "***"))
            .field("key_placement", &self.key_placement)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl FetcherConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let provider = read(ENV_PROVIDER)
            .map(|value| value.parse::<ProviderId>())
            .transpose()?
            .unwrap_or_default();

        let key_placement = read(ENV_KEY_PLACEMENT)
            .map(|value| value.parse::<KeyPlacement>())
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            provider,
            base_url: None,
            api_key: read(ENV_API_KEY),
            finnhub_api_key: read(ENV_FINNHUB_API_KEY),
            key_placement,
            timeout_ms: read(ENV_TIMEOUT_MS).map(|v| parse_timeout(&v)).transpose()?,
        };

        match read(ENV_BASE_URL) {
            Some(base_url) => config.with_base_url(base_url),
            None => Ok(config),
        }
    }

    /// Switching to another provider drops a base URL set for the old one.
    pub fn with_provider(mut self, provider: ProviderId) -> Self {
        if provider != self.provider {
            self.base_url = None;
        }
        self.provider = provider;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let lower = base_url.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl { value: base_url });
        }
        self.base_url = Some(base_url);
        Ok(self)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_key_placement(mut self, key_placement: KeyPlacement) -> Self {
        self.key_placement = key_placement;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: timeout_ms.to_string(),
            });
        }
        self.timeout_ms = Some(timeout_ms);
        Ok(self)
    }

    /// Key sent to the configured provider: `TICKR_API_KEY` first, then the
    /// vendor-named variable when it belongs to this provider.
    pub fn resolved_api_key(&self) -> Option<&str> {
        match (&self.api_key, self.provider) {
            (Some(key), _) => Some(key.as_str()),
            (None, ProviderId::Finnhub) => self.finnhub_api_key.as_deref(),
            (None, ProviderId::Yahoo) => None,
        }
    }

    /// Credential placement using the provider's parameter/header names.
    pub fn auth(&self) -> HttpAuth {
        let Some(key) = self.resolved_api_key().map(str::to_owned) else {
            return HttpAuth::None;
        };

        let (query_name, header_name) = match self.provider {
            ProviderId::Finnhub => ("token", "X-Finnhub-Token"),
            ProviderId::Yahoo => ("apikey", "X-API-KEY"),
        };

        match self.key_placement {
            KeyPlacement::Query => HttpAuth::QueryParam {
                name: String::from(query_name),
                value: key,
            },
            KeyPlacement::Header => HttpAuth::Header {
                name: String::from(header_name),
                value: key,
            },
        }
    }

    /// Adapter for the configured provider.
    pub fn source(&self) -> Box<dyn QuoteSource> {
        let auth = self.auth();
        match self.provider {
            ProviderId::Finnhub => {
                let adapter = match &self.base_url {
                    Some(base_url) => FinnhubAdapter::new(base_url.as_str(), auth),
                    None => FinnhubAdapter::default().with_auth(auth),
                };
                Box::new(adapter.with_timeout_ms(self.timeout_ms))
            }
            ProviderId::Yahoo => {
                let adapter = match &self.base_url {
                    Some(base_url) => YahooAdapter::new(base_url.as_str(), auth),
                    None => YahooAdapter::default().with_auth(auth),
                };
                Box::new(adapter.with_timeout_ms(self.timeout_ms))
            }
        }
    }
}

fn parse_timeout(value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(timeout_ms) if timeout_ms > 0 => Ok(timeout_ms),
        _ => Err(ConfigError::InvalidTimeout {
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::Symbol;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_finnhub_without_credentials() {
        let config = FetcherConfig::from_lookup(lookup(&[])).expect("valid config");
        assert_eq!(config, FetcherConfig::default());
        assert_eq!(config.auth(), HttpAuth::None);
        assert_eq!(config.source().id(), ProviderId::Finnhub);
    }

    #[test]
    fn reads_every_variable() {
        let config = FetcherConfig::from_lookup(lookup(&[
            (ENV_PROVIDER, "yahoo"),
            (ENV_BASE_URL, "http://localhost:8080"),
            (ENV_API_KEY, "secret"),
            (ENV_KEY_PLACEMENT, "header"),
            (ENV_TIMEOUT_MS, "1500"),
        ]))
        .expect("valid config");

        assert_eq!(config.provider, ProviderId::Yahoo);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.key_placement, KeyPlacement::Header);
        assert_eq!(config.timeout_ms, Some(1500));

        let symbol = Symbol::parse("AAPL").expect("valid symbol");
        let request = config.source().quote_request(&symbol);
        assert_eq!(
            request.url,
            "http://localhost:8080/v7/finance/quote?symbols=AAPL"
        );
        assert_eq!(request.headers.get("x-api-key").map(String::as_str), Some("secret"));
        assert_eq!(request.timeout_ms, Some(1500));
    }

    #[test]
    fn finnhub_key_falls_back_to_vendor_variable() {
        let config = FetcherConfig::from_lookup(lookup(&[(ENV_FINNHUB_API_KEY, "fh")]))
            .expect("valid config");
        assert_eq!(
            config.auth(),
            HttpAuth::QueryParam {
                name: String::from("token"),
                value: String::from("fh"),
            }
        );

        let yahoo = FetcherConfig::from_lookup(lookup(&[
            (ENV_PROVIDER, "yahoo"),
            (ENV_FINNHUB_API_KEY, "fh"),
        ]))
        .expect("valid config");
        assert_eq!(yahoo.resolved_api_key(), None);
        assert_eq!(yahoo.auth(), HttpAuth::None);
    }

    #[test]
    fn vendor_key_follows_provider_switches() {
        let env = FetcherConfig::from_lookup(lookup(&[(ENV_FINNHUB_API_KEY, "fh")]))
            .expect("valid config");

        let yahoo = env.clone().with_provider(ProviderId::Yahoo);
        assert_eq!(yahoo.auth(), HttpAuth::None);

        let back = yahoo.with_provider(ProviderId::Finnhub);
        assert_eq!(back.resolved_api_key(), Some("fh"));
    }

    #[test]
    fn generic_key_wins_over_vendor_key() {
        let config = FetcherConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "generic"),
            (ENV_FINNHUB_API_KEY, "fh"),
        ]))
        .expect("valid config");
        assert_eq!(config.resolved_api_key(), Some("generic"));
    }

    #[test]
    fn switching_provider_drops_its_base_url() {
        let config = FetcherConfig::from_lookup(lookup(&[(ENV_BASE_URL, "http://localhost:9000")]))
            .expect("valid config");

        let same = config.clone().with_provider(ProviderId::Finnhub);
        assert_eq!(same.base_url.as_deref(), Some("http://localhost:9000"));

        let other = config.with_provider(ProviderId::Yahoo);
        assert_eq!(other.base_url, None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = FetcherConfig::from_lookup(lookup(&[(ENV_PROVIDER, "  "), (ENV_API_KEY, "")]))
            .expect("valid config");
        assert_eq!(config.provider, ProviderId::Finnhub);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = FetcherConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "0")])).expect_err("zero");
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));

        let err =
            FetcherConfig::from_lookup(lookup(&[(ENV_KEY_PLACEMENT, "cookie")])).expect_err("bad");
        assert!(matches!(err, ConfigError::InvalidKeyPlacement { .. }));

        let err =
            FetcherConfig::from_lookup(lookup(&[(ENV_BASE_URL, "ftp://host")])).expect_err("bad");
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn debug_output_masks_api_key() {
        let config = FetcherConfig {
            finnhub_api_key: Some(String::from("vendor-secret")),
            ..FetcherConfig::default()
        }
        .with_api_key("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("vendor-secret"));
        assert!(rendered.contains("***"));
    }
}
