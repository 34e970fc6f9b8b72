use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// Snapshot of a security's latest price and session range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub price: f64,
    pub open: f64,
    pub day_high: f64,
    pub day_low: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<UtcDateTime>,
}

impl Quote {
    pub fn new(
        symbol: Symbol,
        price: f64,
        open: f64,
        day_high: f64,
        day_low: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        validate_non_negative("open", open)?;
        validate_non_negative("day_high", day_high)?;
        validate_non_negative("day_low", day_low)?;

        Ok(Self {
            symbol,
            price,
            open,
            day_high,
            day_low,
            previous_close: None,
            name: None,
            as_of: None,
        })
    }

    pub fn with_previous_close(
        mut self,
        previous_close: Option<f64>,
    ) -> Result<Self, ValidationError> {
        if let Some(value) = previous_close {
            validate_non_negative("previous_close", value)?;
        }
        self.previous_close = previous_close;
        Ok(self)
    }

    /// Blank names are dropped.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        self
    }

    pub fn with_as_of(mut self, as_of: Option<UtcDateTime>) -> Self {
        self.as_of = as_of;
        self
    }

    /// Absolute move since the previous close.
    pub fn change(&self) -> Option<f64> {
        self.previous_close.map(|close| self.price - close)
    }

    /// Percentage move since the previous close; zero when the close is zero.
    pub fn change_percent(&self) -> Option<f64> {
        let close = self.previous_close?;
        if close == 0.0 {
            return Some(0.0);
        }
        Some((self.price - close) / close * 100.0)
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | ${:.2}", self.symbol, self.price)?;
        if let Some(percent) = self.change_percent() {
            write!(f, " | {percent:+.2}%")?;
        }
        Ok(())
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
