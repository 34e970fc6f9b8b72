use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::Symbol;

/// Validation errors raised while building domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
}

/// Invalid fetcher configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid provider '{value}', expected one of finnhub, yahoo")]
    InvalidProvider { value: String },
    #[error("invalid api key placement '{value}', expected query or header")]
    InvalidKeyPlacement { value: String },
    #[error("invalid timeout '{value}', expected a positive number of milliseconds")]
    InvalidTimeout { value: String },
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
}

/// Classification of a failed quote fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Request,
    NotFound,
    Parse,
}

impl FetchErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network_error",
            Self::Request => "request_error",
            Self::NotFound => "not_found",
            Self::Parse => "parse_error",
        }
    }
}

impl Display for FetchErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single quote fetch. Every variant is terminal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("quote request failed with HTTP status {status}")]
    Request { status: u16 },

    #[error("no quote found for symbol '{symbol}'")]
    NotFound { symbol: Symbol },

    #[error("failed to parse quote payload: {message}")]
    Parse { message: String },
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub const fn request(status: u16) -> Self {
        Self::Request { status }
    }

    pub fn not_found(symbol: &Symbol) -> Self {
        Self::NotFound {
            symbol: symbol.clone(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } => FetchErrorKind::Network,
            Self::Request { .. } => FetchErrorKind::Request,
            Self::NotFound { .. } => FetchErrorKind::NotFound,
            Self::Parse { .. } => FetchErrorKind::Parse,
        }
    }

    pub const fn code(&self) -> &'static str {
        self.kind().as_str()
    }

    /// HTTP status carried by `Request` failures.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<ValidationError> for FetchError {
    fn from(value: ValidationError) -> Self {
        Self::parse(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_exposes_status_code() {
        let error = FetchError::request(503);
        assert_eq!(error.kind(), FetchErrorKind::Request);
        assert_eq!(error.status(), Some(503));
        assert_eq!(error.to_string(), "quote request failed with HTTP status 503");
    }

    #[test]
    fn validation_failures_surface_as_parse_errors() {
        let error = FetchError::from(ValidationError::NegativeValue { field: "price" });
        assert_eq!(error.code(), "parse_error");
        assert!(error.to_string().contains("price"));
    }
}
