//! # Domain Models
//!
//! Canonical domain types for tickr quotes.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Quote`] | Latest price with session open, high and low |
//! | [`Symbol`] | Validated ticker symbol |
//! | [`UtcDateTime`] | UTC timestamp reported by the provider |
//!
//! Construction validates every invariant, so a value of these types is
//! always well formed:
//!
//! ```rust
//! use tickr_core::{Quote, Symbol, ValidationError};
//!
//! let symbol = Symbol::parse("aapl").unwrap();
//! let negative = Quote::new(symbol, -1.0, 148.0, 151.0, 147.5);
//! assert!(matches!(negative, Err(ValidationError::NegativeValue { field: "price" })));
//! ```

mod quote;
mod symbol;
mod timestamp;

pub use quote::Quote;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
