use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ConfigError;

/// Quote providers with a built-in adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderId {
    #[default]
    Finnhub,
    Yahoo,
}

impl ProviderId {
    pub const ALL: [Self; 2] = [Self::Finnhub, Self::Yahoo];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finnhub => "finnhub",
            Self::Yahoo => "yahoo",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "finnhub" => Ok(Self::Finnhub),
            "yahoo" => Ok(Self::Yahoo),
            other => Err(ConfigError::InvalidProvider {
                value: other.to_owned(),
            }),
        }
    }
}
