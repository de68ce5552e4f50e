//! Field extraction from invoice PDFs.
//!
//! An extractor turns a document on disk into the untyped field mapping that
//! [`validate`](crate::core::validate) consumes. Layout analysis is not
//! implemented: [`SampleExtractor`] reads the PDF and returns
//! [`sample_fields`](crate::core::sample_fields).

mod extract;

pub use extract::{FieldExtractor, SampleExtractor, read_text};
