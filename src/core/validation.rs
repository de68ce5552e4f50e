use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use super::error::{SchemaValidationError, ValidationError, ViolationKind};
use super::types::*;

type Object = Map<String, Value>;

/// Numeric policy applied while validating.
///
/// The defaults accept any decimal literal, which is what the TEIF producer
/// upstream does. Stricter checks are opt-in.
///
/// ```
/// use teif::core::ValidationOptions;
///
/// let strict = ValidationOptions::new().reject_negative(true).max_decimal_places(3);
/// assert!(strict.rejects_negative());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    reject_negative: bool,
    max_decimal_places: Option<u32>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report negative quantities, prices and amounts.
    pub fn reject_negative(mut self, reject: bool) -> Self {
        self.reject_negative = reject;
        self
    }

    /// Report decimals with more fractional digits than `places`
    /// (trailing zeros do not count).
    pub fn max_decimal_places(mut self, places: u32) -> Self {
        self.max_decimal_places = Some(places);
        self
    }

    pub fn rejects_negative(&self) -> bool {
        self.reject_negative
    }

    pub fn decimal_places_limit(&self) -> Option<u32> {
        self.max_decimal_places
    }
}

/// Validate an untyped invoice mapping and decode it into a [`Teif`].
///
/// Every field is checked; the error lists all violations, not just the first.
pub fn validate(input: &Value) -> Result<Teif, SchemaValidationError> {
    validate_with(input, &ValidationOptions::default())
}

/// [`validate`] with an explicit numeric policy.
pub fn validate_with(
    input: &Value,
    options: &ValidationOptions,
) -> Result<Teif, SchemaValidationError> {
    let mut decoder = Decoder {
        options,
        errors: Vec::new(),
    };
    let doc = decoder.object(input, "$").and_then(|obj| decoder.teif(obj));

    match (doc, SchemaValidationError::from_errors(decoder.errors)) {
        (Some(doc), None) => {
            tracing::debug!(
                dates = doc.dates.len(),
                partners = doc.partners.details.len(),
                line_sections = doc.line_sections.len(),
                "invoice validated"
            );
            Ok(doc)
        }
        (_, Some(err)) => {
            tracing::debug!(violations = err.errors().len(), "invoice failed schema validation");
            Err(err)
        }
        // Every decoder that yields None records a violation first.
        (None, None) => Err(SchemaValidationError::single(ValidationError::new(
            "$",
            ViolationKind::WrongType { expected: "object" },
            "document could not be decoded",
        ))),
    }
}

/// Bottom-up record decoder.
///
/// Each record method checks all of its fields before combining them, so a
/// failing field never hides its siblings.
struct Decoder<'o> {
    options: &'o ValidationOptions,
    errors: Vec<ValidationError>,
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

impl Decoder<'_> {
    fn teif(&mut self, obj: &Object) -> Option<Teif> {
        let path = "";
        let version = self.string(obj, path, "version");
        let controling_agency = self.string(obj, path, "controlingAgency");
        let header = self.record(obj, path, "InvoiceHeader", Self::header);
        let bgm = self.record(obj, path, "Bgm", Self::bgm);
        let dates = self.sequence(obj, path, "Dtm", true, Self::dtm);
        let partners = self.record(obj, path, "PartnerSection", Self::partner_section);
        let line_sections = self.sequence(obj, path, "LinSection", false, Self::lin_section);
        let amounts = self.record(obj, path, "InvoiceMoa", Self::invoice_moa);
        let tax = self.record(obj, path, "InvoiceTax", Self::invoice_tax);

        Some(Teif {
            version: version?,
            controling_agency: controling_agency?,
            header: header?,
            bgm: bgm?,
            dates: dates?,
            partners: partners?,
            line_sections: line_sections?,
            amounts: amounts?,
            tax: tax?,
        })
    }

    fn header(&mut self, obj: &Object, path: &str) -> Option<InvoiceHeader> {
        let sender = self.record(obj, path, "MessageSenderIdentifier", Self::identifier);
        let receiver = self.record(obj, path, "MessageReceiverIdentifier", Self::identifier);
        Some(InvoiceHeader {
            sender: sender?,
            receiver: receiver?,
        })
    }

    fn identifier(&mut self, obj: &Object, path: &str) -> Option<Identifier> {
        let id_type = self.string(obj, path, "type");
        let value = self.string(obj, path, "value");
        Some(Identifier {
            id_type: id_type?,
            value: value?,
        })
    }

    fn bgm(&mut self, obj: &Object, path: &str) -> Option<Bgm> {
        let document_identifier = self.string(obj, path, "DocumentIdentifier");
        let document_type = self.record(obj, path, "DocumentType", |d, obj, path| {
            let code = d.string(obj, path, "code");
            let name = d.string(obj, path, "name");
            Some(DocumentType {
                code: code?,
                name: name?,
            })
        });
        Some(Bgm {
            document_identifier: document_identifier?,
            document_type: document_type?,
        })
    }

    fn dtm(&mut self, obj: &Object, path: &str) -> Option<Dtm> {
        let function_code = self.string(obj, path, "functionCode");
        let format = self.string(obj, path, "format");
        let date_text = self.string(obj, path, "DateText");
        Some(Dtm {
            function_code: function_code?,
            format: format?,
            date_text: date_text?,
        })
    }

    fn partner_section(&mut self, obj: &Object, path: &str) -> Option<PartnerSection> {
        let details = self.sequence(obj, path, "PartnerDetails", false, Self::partner_details)?;
        Some(PartnerSection { details })
    }

    fn partner_details(&mut self, obj: &Object, path: &str) -> Option<PartnerDetails> {
        let function_code = self.string(obj, path, "functionCode");
        let nad = self.record(obj, path, "Nad", Self::nad);
        Some(PartnerDetails {
            function_code: function_code?,
            nad: nad?,
        })
    }

    fn nad(&mut self, obj: &Object, path: &str) -> Option<Nad> {
        let identifier = self.record(obj, path, "PartnerIdentifier", Self::identifier);
        let name = self.record(obj, path, "PartnerNom", |d, obj, path| {
            let value = d.string(obj, path, "value")?;
            Some(PartnerName { value })
        });
        let addresses = self.sequence(obj, path, "PartnerAdresses", true, Self::address);
        Some(Nad {
            identifier: identifier?,
            name: name?,
            addresses: addresses?,
        })
    }

    fn address(&mut self, obj: &Object, path: &str) -> Option<PartnerAddress> {
        let street = self.optional_string(obj, path, "Street");
        let city_name = self.optional_string(obj, path, "CityName");
        let postal_code = self.optional_string(obj, path, "PostalCode");
        let country = self.string(obj, path, "Country");
        Some(PartnerAddress {
            street: street?,
            city_name: city_name?,
            postal_code: postal_code?,
            country: country?,
        })
    }

    fn lin_section(&mut self, obj: &Object, path: &str) -> Option<LinSection> {
        let items = self.sequence(obj, path, "Lin", false, Self::lin_item)?;
        Some(LinSection { items })
    }

    fn lin_item(&mut self, obj: &Object, path: &str) -> Option<LinItem> {
        let item_identifier = self.string(obj, path, "ItemIdentifier");
        let description = self.string(obj, path, "Description");
        let quantity = self.decimal(obj, path, "Quantity");
        let unit_price = self.decimal(obj, path, "UnitPrice");
        let line_total = self.decimal(obj, path, "LineTotal");
        Some(LinItem {
            item_identifier: item_identifier?,
            description: description?,
            quantity: quantity?,
            unit_price: unit_price?,
            line_total: line_total?,
        })
    }

    fn invoice_moa(&mut self, obj: &Object, path: &str) -> Option<InvoiceMoa> {
        let details = self.sequence(obj, path, "AmountDetails", false, |d, obj, path| {
            let currency_code_list = d.string(obj, path, "currencyCodeList");
            let amount_type_code = d.string(obj, path, "amountTypeCode");
            let amount = d.decimal(obj, path, "Amount");
            Some(AmountDetail {
                currency_code_list: currency_code_list?,
                amount_type_code: amount_type_code?,
                amount: amount?,
            })
        })?;
        Some(InvoiceMoa { details })
    }

    fn invoice_tax(&mut self, obj: &Object, path: &str) -> Option<InvoiceTax> {
        let tax_type_code = self.string(obj, path, "TaxTypeCode");
        let tax_rate = self.decimal(obj, path, "TaxRate");
        let tax_amount = self.decimal(obj, path, "TaxAmount");
        Some(InvoiceTax {
            tax_type_code: tax_type_code?,
            tax_rate: tax_rate?,
            tax_amount: tax_amount?,
        })
    }

    // --- field primitives ---

    /// Look up a required key, reporting absent and null values.
    fn required<'v>(&mut self, obj: &'v Object, field: &str, key: &str) -> Option<&'v Value> {
        match obj.get(key) {
            None => {
                self.errors.push(ValidationError::missing(field));
                None
            }
            Some(Value::Null) => {
                self.errors.push(ValidationError::null(field));
                None
            }
            Some(value) => Some(value),
        }
    }

    fn object<'v>(&mut self, value: &'v Value, field: &str) -> Option<&'v Object> {
        match value {
            Value::Object(obj) => Some(obj),
            _ => {
                self.errors.push(ValidationError::wrong_type(field, "object"));
                None
            }
        }
    }

    fn string(&mut self, obj: &Object, parent: &str, key: &str) -> Option<String> {
        let field = join(parent, key);
        match self.required(obj, &field, key)? {
            Value::String(s) => self.xml_text(field, s),
            _ => {
                self.errors.push(ValidationError::wrong_type(field, "string"));
                None
            }
        }
    }

    /// Absent and null both decode to `Some(None)`; the outer `None` means a
    /// violation was recorded.
    fn optional_string(&mut self, obj: &Object, parent: &str, key: &str) -> Option<Option<String>> {
        match obj.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(Value::String(s)) => self.xml_text(join(parent, key), s).map(Some),
            Some(_) => {
                self.errors
                    .push(ValidationError::wrong_type(join(parent, key), "string"));
                None
            }
        }
    }

    /// Every accepted string ends up as XML character data, so it must be
    /// made of XML 1.0 `Char`s.
    fn xml_text(&mut self, field: String, s: &str) -> Option<String> {
        match s.chars().find(|&c| !is_xml_char(c)) {
            Some(c) => {
                self.errors.push(ValidationError::invalid_character(field, c));
                None
            }
            None => Some(s.to_owned()),
        }
    }

    fn decimal(&mut self, obj: &Object, parent: &str, key: &str) -> Option<Decimal> {
        let field = join(parent, key);
        let Value::Number(n) = self.required(obj, &field, key)? else {
            self.errors.push(ValidationError::wrong_type(field, "number"));
            return None;
        };

        let Some(value) = number_to_decimal(n) else {
            self.errors.push(ValidationError::new(
                field,
                ViolationKind::OutOfRange,
                format!("{n} needs more than 28 decimal places or exceeds the 96-bit decimal range"),
            ));
            return None;
        };

        if self.options.reject_negative && value.is_sign_negative() && !value.is_zero() {
            self.errors.push(ValidationError::new(
                field,
                ViolationKind::OutOfRange,
                format!("{value} must not be negative"),
            ));
            return None;
        }

        if let Some(places) = self.options.max_decimal_places {
            if value.normalize().scale() > places {
                self.errors.push(ValidationError::new(
                    field,
                    ViolationKind::OutOfRange,
                    format!("{value} has more than {places} decimal places"),
                ));
                return None;
            }
        }

        Some(value)
    }

    fn record<T>(
        &mut self,
        obj: &Object,
        parent: &str,
        key: &str,
        decode: impl FnOnce(&mut Self, &Object, &str) -> Option<T>,
    ) -> Option<T> {
        let field = join(parent, key);
        let value = self.required(obj, &field, key)?;
        let inner = self.object(value, &field)?;
        decode(self, inner, &field)
    }

    fn sequence<T>(
        &mut self,
        obj: &Object,
        parent: &str,
        key: &str,
        non_empty: bool,
        mut decode: impl FnMut(&mut Self, &Object, &str) -> Option<T>,
    ) -> Option<Vec<T>> {
        let field = join(parent, key);
        let Value::Array(entries) = self.required(obj, &field, key)? else {
            self.errors.push(ValidationError::wrong_type(field, "array"));
            return None;
        };

        if non_empty && entries.is_empty() {
            self.errors.push(ValidationError::new(
                field,
                ViolationKind::Empty,
                "at least one entry required",
            ));
            return None;
        }

        let mut decoded = Vec::with_capacity(entries.len());
        let mut failed = false;
        for (i, entry) in entries.iter().enumerate() {
            let entry_path = format!("{field}[{i}]");
            match self
                .object(entry, &entry_path)
                .and_then(|inner| decode(self, inner, &entry_path))
            {
                Some(item) => decoded.push(item),
                None => failed = true,
            }
        }

        if failed { None } else { Some(decoded) }
    }
}

/// Convert a JSON numeric literal to a decimal exactly.
///
/// serde_json keeps the literal text (`arbitrary_precision`), which is parsed
/// without rounding. Literals that need more than 28 fractional digits, or
/// that do not fit the 96-bit mantissa, yield `None`.
fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    let text = n.to_string();
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text.to_ascii_lowercase()).ok()
    } else {
        Decimal::from_str_exact(&text).ok()
    }
}

/// The XML 1.0 `Char` production. Surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
