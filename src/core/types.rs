use rust_decimal::Decimal;
use serde::Serialize;

/// TEIF: the top-level invoice document.
///
/// Only produced by [`validate`](super::validate); serde field names are the
/// wire keys of the extractor mapping. Serializing yields a mapping that
/// validates back to an equal document, with every decimal written exactly.
///
/// There is no `Deserialize` impl, so mappings cannot skip the validator:
///
/// ```compile_fail
/// let doc: teif::core::Teif = serde_json::from_value(teif::core::sample_fields()).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Teif {
    /// Format version (e.g. "2.0").
    pub version: String,
    /// Controlling agency (e.g. "TTN"). The wire spelling has a single "l".
    #[serde(rename = "controlingAgency")]
    pub controling_agency: String,
    #[serde(rename = "InvoiceHeader")]
    pub header: InvoiceHeader,
    #[serde(rename = "Bgm")]
    pub bgm: Bgm,
    /// At least one date entry, in input order.
    #[serde(rename = "Dtm")]
    pub dates: Vec<Dtm>,
    #[serde(rename = "PartnerSection")]
    pub partners: PartnerSection,
    #[serde(rename = "LinSection")]
    pub line_sections: Vec<LinSection>,
    #[serde(rename = "InvoiceMoa")]
    pub amounts: InvoiceMoa,
    #[serde(rename = "InvoiceTax")]
    pub tax: InvoiceTax,
}

/// Message sender and receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceHeader {
    #[serde(rename = "MessageSenderIdentifier")]
    pub sender: Identifier,
    #[serde(rename = "MessageReceiverIdentifier")]
    pub receiver: Identifier,
}

/// Typed identifier, e.g. `I-01` + tax registration number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub id_type: String,
    pub value: String,
}

/// Beginning of message: document identifier and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bgm {
    #[serde(rename = "DocumentIdentifier")]
    pub document_identifier: String,
    #[serde(rename = "DocumentType")]
    pub document_type: DocumentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentType {
    /// Document type code (e.g. "380" for an invoice).
    pub code: String,
    /// Display name (e.g. "Facture").
    pub name: String,
}

/// Date/time segment: a dated event with its format code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dtm {
    /// Date function code (e.g. "137" for the document date).
    #[serde(rename = "functionCode")]
    pub function_code: String,
    /// Format code of `date_text` (e.g. "DDMMYY").
    pub format: String,
    #[serde(rename = "DateText")]
    pub date_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerSection {
    #[serde(rename = "PartnerDetails")]
    pub details: Vec<PartnerDetails>,
}

/// One trading partner, tagged with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerDetails {
    /// Partner function (e.g. "SU" seller, "BY" buyer).
    #[serde(rename = "functionCode")]
    pub function_code: String,
    #[serde(rename = "Nad")]
    pub nad: Nad,
}

/// Name and address segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nad {
    #[serde(rename = "PartnerIdentifier")]
    pub identifier: Identifier,
    #[serde(rename = "PartnerNom")]
    pub name: PartnerName,
    /// At least one address.
    #[serde(rename = "PartnerAdresses")]
    pub addresses: Vec<PartnerAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerName {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerAddress {
    #[serde(rename = "Street")]
    pub street: Option<String>,
    #[serde(rename = "CityName")]
    pub city_name: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    /// Country code (ISO 3166-1 alpha-2).
    #[serde(rename = "Country")]
    pub country: String,
}

/// A group of invoice lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinSection {
    #[serde(rename = "Lin")]
    pub items: Vec<LinItem>,
}

/// One billed product or service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinItem {
    #[serde(rename = "ItemIdentifier")]
    pub item_identifier: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Quantity", serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub quantity: Decimal,
    #[serde(rename = "UnitPrice", serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub unit_price: Decimal,
    #[serde(rename = "LineTotal", serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub line_total: Decimal,
}

/// Monetary amounts of the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceMoa {
    #[serde(rename = "AmountDetails")]
    pub details: Vec<AmountDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountDetail {
    /// Currency code (e.g. "TND").
    #[serde(rename = "currencyCodeList")]
    pub currency_code_list: String,
    /// Amount type code (e.g. "I-189" total payable).
    #[serde(rename = "amountTypeCode")]
    pub amount_type_code: String,
    #[serde(rename = "Amount", serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceTax {
    #[serde(rename = "TaxTypeCode")]
    pub tax_type_code: String,
    /// Tax rate percentage.
    #[serde(rename = "TaxRate", serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub tax_rate: Decimal,
    #[serde(rename = "TaxAmount", serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub tax_amount: Decimal,
}

impl Teif {
    /// Iterate over every line item across all line groups, in document order.
    pub fn line_items(&self) -> impl Iterator<Item = &LinItem> {
        self.line_sections.iter().flat_map(|s| s.items.iter())
    }

    /// Partner with the given function code (e.g. "SU", "BY").
    pub fn partner(&self, function_code: &str) -> Option<&PartnerDetails> {
        self.partners
            .details
            .iter()
            .find(|p| p.function_code == function_code)
    }
}
