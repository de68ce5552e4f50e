use super::xml_utils::{XmlResult, XmlWriter};
use crate::core::*;

/// Which optional parts of the document are projected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlOptions {
    include_partners: bool,
}

impl XmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `PartnerSection` between the `Dtm` entries and the line sections.
    ///
    /// Off by default: the reference TEIF output carries no partner data even
    /// though the schema requires it.
    pub fn include_partners(mut self, include: bool) -> Self {
        self.include_partners = include;
        self
    }

    pub fn includes_partners(&self) -> bool {
        self.include_partners
    }
}

/// Generate TEIF XML from a validated document.
pub fn to_teif_xml(doc: &Teif) -> XmlResult {
    to_teif_xml_with(doc, &XmlOptions::default())
}

/// Generate TEIF XML with explicit projection options.
pub fn to_teif_xml_with(doc: &Teif, options: &XmlOptions) -> XmlResult {
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs(
        "TEIF",
        &[
            ("version", doc.version.as_str()),
            ("controlingAgency", doc.controling_agency.as_str()),
        ],
    )?;

    write_header(&mut w, &doc.header)?;

    w.start_element("InvoiceBody")?;

    // Bgm
    w.start_element("Bgm")?;
    w.text_element("DocumentIdentifier", &doc.bgm.document_identifier)?;
    w.text_element_with_attrs(
        "DocumentType",
        &doc.bgm.document_type.name,
        &[("code", doc.bgm.document_type.code.as_str())],
    )?;
    w.end_element("Bgm")?;

    // Dtm, one per date in input order
    for dtm in &doc.dates {
        w.start_element_with_attrs(
            "Dtm",
            &[
                ("functionCode", dtm.function_code.as_str()),
                ("format", dtm.format.as_str()),
            ],
        )?;
        w.text_element("DateText", &dtm.date_text)?;
        w.end_element("Dtm")?;
    }

    if options.include_partners {
        write_partners(&mut w, &doc.partners)?;
    } else {
        tracing::debug!(
            partners = doc.partners.details.len(),
            "PartnerSection not projected"
        );
    }

    // Lines
    for section in &doc.line_sections {
        w.start_element("LinSection")?;
        for item in &section.items {
            write_lin(&mut w, item)?;
        }
        w.end_element("LinSection")?;
    }

    // Totals
    w.start_element("InvoiceMoa")?;
    for amount in &doc.amounts.details {
        w.start_element_with_attrs(
            "AmountDetails",
            &[
                ("currencyCodeList", amount.currency_code_list.as_str()),
                ("amountTypeCode", amount.amount_type_code.as_str()),
            ],
        )?;
        w.decimal_element("Amount", amount.amount)?;
        w.end_element("AmountDetails")?;
    }
    w.end_element("InvoiceMoa")?;

    w.start_element("InvoiceTax")?;
    w.text_element("TaxTypeCode", &doc.tax.tax_type_code)?;
    w.decimal_element("TaxRate", doc.tax.tax_rate)?;
    w.decimal_element("TaxAmount", doc.tax.tax_amount)?;
    w.end_element("InvoiceTax")?;

    w.end_element("InvoiceBody")?;
    w.end_element("TEIF")?;

    let xml = w.into_string()?;
    tracing::debug!(
        document = %doc.bgm.document_identifier,
        bytes = xml.len(),
        "TEIF XML generated"
    );
    Ok(xml)
}

fn write_header(w: &mut XmlWriter, header: &InvoiceHeader) -> Result<(), TeifError> {
    w.start_element("InvoiceHeader")?;
    w.identifier_element("MessageSenderIdentifier", &header.sender)?;
    w.identifier_element("MessageReceiverIdentifier", &header.receiver)?;
    w.end_element("InvoiceHeader")?;
    Ok(())
}

fn write_partners(w: &mut XmlWriter, partners: &PartnerSection) -> Result<(), TeifError> {
    w.start_element("PartnerSection")?;
    for partner in &partners.details {
        w.start_element_with_attrs(
            "PartnerDetails",
            &[("functionCode", partner.function_code.as_str())],
        )?;
        w.start_element("Nad")?;
        w.identifier_element("PartnerIdentifier", &partner.nad.identifier)?;
        w.text_element("PartnerNom", &partner.nad.name.value)?;
        for address in &partner.nad.addresses {
            w.start_element("PartnerAdresses")?;
            if let Some(street) = &address.street {
                w.text_element("Street", street)?;
            }
            if let Some(city) = &address.city_name {
                w.text_element("CityName", city)?;
            }
            if let Some(postal_code) = &address.postal_code {
                w.text_element("PostalCode", postal_code)?;
            }
            w.text_element("Country", &address.country)?;
            w.end_element("PartnerAdresses")?;
        }
        w.end_element("Nad")?;
        w.end_element("PartnerDetails")?;
    }
    w.end_element("PartnerSection")?;
    Ok(())
}

fn write_lin(w: &mut XmlWriter, item: &LinItem) -> Result<(), TeifError> {
    w.start_element("Lin")?;
    w.text_element("ItemIdentifier", &item.item_identifier)?;
    w.text_element("Description", &item.description)?;
    w.decimal_element("Quantity", item.quantity)?;
    w.decimal_element("UnitPrice", item.unit_price)?;
    w.decimal_element("LineTotal", item.line_total)?;
    w.end_element("Lin")?;
    Ok(())
}
