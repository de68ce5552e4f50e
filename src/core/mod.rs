//! Core TEIF types, schema validation, and the sample field mapping.
//!
//! Input arrives as an untyped [`serde_json::Value`] mapping; [`validate`]
//! is the single boundary that turns it into a typed [`Teif`] document.

mod dates;
mod error;
mod sample;
mod types;
mod validation;

pub use dates::DtmValue;
pub use error::*;
pub use sample::sample_fields;
pub use types::*;
pub use validation::*;
