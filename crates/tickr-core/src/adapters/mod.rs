mod finnhub;
mod yahoo;

pub use finnhub::FinnhubAdapter;
pub use yahoo::YahooAdapter;

use crate::{FetchError, ProviderId};

/// A payload with none of the price fields populated (or all of them zero)
/// describes a symbol the provider does not know.
fn carries_no_prices(values: &[Option<f64>]) -> bool {
    values
        .iter()
        .all(|value| value.map_or(true, |price| price == 0.0))
}

fn require_field(
    provider: ProviderId,
    key: &'static str,
    value: Option<f64>,
) -> Result<f64, FetchError> {
    value.ok_or_else(|| FetchError::parse(format!("{provider} payload is missing '{key}'")))
}

fn trim_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}
