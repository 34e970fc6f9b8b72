use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Longest ticker accepted, exchange suffix included (`0700.HK`, `RDS-A.AS`).
const MAX_SYMBOL_LEN: usize = 15;

/// Ticker as sent to the provider: trimmed, upper-case ASCII.
///
/// Accepts letters, digits, `.` (share classes like `BRK.B`, exchange
/// suffixes like `0700.HK`), `-` and a `^` index prefix (`^GSPC`). Whether
/// the ticker exists is for the provider to answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

fn is_ticker_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '^')
}

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let ticker = input.trim().to_ascii_uppercase();
        if ticker.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = ticker.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        if let Some((index, ch)) = ticker.chars().enumerate().find(|(_, ch)| !is_ticker_char(*ch)) {
            return Err(ValidationError::SymbolInvalidChar { ch, index });
        }

        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// serde goes through these so a deserialized quote carries a checked ticker.
impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
