//! # teif
//!
//! TEIF (Tunisian e-invoice exchange format) conversion: validate an untyped
//! invoice field mapping against the TEIF schema and serialize the typed
//! document to XML.
//!
//! All quantities and amounts use [`rust_decimal::Decimal`], never floating
//! point.
//!
//! ## Quick Start
//!
//! ```rust
//! use teif::core::*;
//!
//! let doc = validate(&sample_fields()).unwrap();
//! assert_eq!(doc.controling_agency, "TTN");
//!
//! let xml = teif::xml::to_teif_xml(&doc).unwrap();
//! assert!(xml.contains(r#"<TEIF version="2.0" controlingAgency="TTN">"#));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | TEIF types, schema validation, sample data |
//! | `xml` | TEIF XML generation |
//! | `pdf` | PDF field extraction (sample stub) |
//! | `all` | Everything (default) |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod xml;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
