//! TEIF XML generation.
//!
//! The projector walks a validated [`Teif`] depth-first in schema order and
//! writes the whole document into memory before returning it, so callers
//! get either complete XML or an error.
//!
//! # Example
//!
//! ```
//! use teif::core::*;
//! use teif::xml;
//!
//! let doc = validate(&sample_fields()).unwrap();
//! let xml = xml::to_teif_xml(&doc).unwrap();
//! assert!(xml.contains("<TaxAmount>570.0</TaxAmount>"));
//! ```

mod teif;
pub(crate) mod xml_utils;

pub use teif::{XmlOptions, to_teif_xml, to_teif_xml_with};
pub use xml_utils::format_decimal;

use crate::core::{Teif, TeifError, ValidationOptions, validate_with};

/// Options for the full mapping-to-XML conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub validation: ValidationOptions,
    pub xml: XmlOptions,
}

/// Validate an untyped field mapping and project it to TEIF XML.
///
/// No XML is produced when validation fails; the error carries every
/// violation found.
pub fn convert(input: &serde_json::Value, options: &ConvertOptions) -> Result<String, TeifError> {
    let doc: Teif = validate_with(input, &options.validation)?;
    to_teif_xml_with(&doc, &options.xml)
}
