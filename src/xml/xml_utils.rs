use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;
use std::io::Cursor;

use crate::core::{Identifier, TeifError};

pub type XmlResult = Result<String, TeifError>;

fn xml_io(e: std::io::Error) -> TeifError {
    TeifError::Xml(format!("XML write error: {e}"))
}

/// In-memory, indented XML writer. Nothing is returned to the caller until
/// [`XmlWriter::into_string`] succeeds.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, TeifError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> XmlResult {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| TeifError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, TeifError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, TeifError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, TeifError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, TeifError> {
        self.text_element_with_attrs(name, text, &[])
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, TeifError> {
        self.start_element_with_attrs(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write a decimal in canonical form (see [`format_decimal`]).
    pub fn decimal_element(&mut self, name: &str, value: Decimal) -> Result<&mut Self, TeifError> {
        self.text_element(name, &format_decimal(value))
    }

    /// `<name type="...">value</name>`, the shape shared by the message
    /// sender, receiver and partner identifiers.
    pub fn identifier_element(&mut self, name: &str, id: &Identifier) -> Result<&mut Self, TeifError> {
        self.text_element_with_attrs(name, &id.value, &[("type", id.id_type.as_str())])
    }
}

/// Canonical decimal text: trailing zeros stripped, at least one
/// fractional digit, `-0` rendered as `0.0`.
pub fn format_decimal(d: Decimal) -> String {
    let s = d.normalize().to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}
