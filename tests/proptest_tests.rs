//! Property-based tests for validation and XML generation.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "xml")]

use proptest::prelude::*;
use rust_decimal::Decimal;
use teif::core::*;
use teif::xml::{self, format_decimal};

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .&<>'/-]{0,15}"
}

/// Any 64-bit mantissa with up to 10 decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_identifier() -> impl Strategy<Value = Identifier> {
    (arb_text(), arb_text()).prop_map(|(id_type, value)| Identifier { id_type, value })
}

fn arb_dtm() -> impl Strategy<Value = Dtm> {
    (arb_text(), arb_text(), "[0-9]{6}").prop_map(|(function_code, format, date_text)| Dtm {
        function_code,
        format,
        date_text,
    })
}

fn arb_address() -> impl Strategy<Value = PartnerAddress> {
    (
        proptest::option::of(arb_text()),
        proptest::option::of(arb_text()),
        proptest::option::of("[0-9]{4}"),
        "[A-Z]{2}",
    )
        .prop_map(|(street, city_name, postal_code, country)| PartnerAddress {
            street,
            city_name,
            postal_code,
            country,
        })
}

fn arb_partner() -> impl Strategy<Value = PartnerDetails> {
    (
        "[A-Z]{2}",
        arb_identifier(),
        arb_text(),
        prop::collection::vec(arb_address(), 1..3),
    )
        .prop_map(|(function_code, identifier, name, addresses)| PartnerDetails {
            function_code,
            nad: Nad {
                identifier,
                name: PartnerName { value: name },
                addresses,
            },
        })
}

fn arb_item() -> impl Strategy<Value = LinItem> {
    (arb_text(), arb_text(), arb_amount(), arb_amount(), arb_amount()).prop_map(
        |(item_identifier, description, quantity, unit_price, line_total)| LinItem {
            item_identifier,
            description,
            quantity,
            unit_price,
            line_total,
        },
    )
}

fn arb_teif() -> impl Strategy<Value = Teif> {
    (
        (arb_text(), arb_text(), arb_identifier(), arb_identifier()),
        (arb_text(), arb_text(), arb_text()),
        prop::collection::vec(arb_dtm(), 1..6),
        prop::collection::vec(arb_partner(), 0..3),
        prop::collection::vec(prop::collection::vec(arb_item(), 0..4), 0..3),
        prop::collection::vec((arb_text(), arb_text(), arb_amount()), 0..3),
        (arb_text(), arb_amount(), arb_amount()),
    )
        .prop_map(
            |(
                (version, controling_agency, sender, receiver),
                (document_identifier, code, name),
                dates,
                partners,
                sections,
                amounts,
                (tax_type_code, tax_rate, tax_amount),
            )| Teif {
                version,
                controling_agency,
                header: InvoiceHeader { sender, receiver },
                bgm: Bgm {
                    document_identifier,
                    document_type: DocumentType { code, name },
                },
                dates,
                partners: PartnerSection { details: partners },
                line_sections: sections
                    .into_iter()
                    .map(|items| LinSection { items })
                    .collect(),
                amounts: InvoiceMoa {
                    details: amounts
                        .into_iter()
                        .map(|(currency_code_list, amount_type_code, amount)| AmountDetail {
                            currency_code_list,
                            amount_type_code,
                            amount,
                        })
                        .collect(),
                },
                tax: InvoiceTax {
                    tax_type_code,
                    tax_rate,
                    tax_amount,
                },
            },
        )
}

fn element_names<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    name: &str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    doc.descendants().filter(|n| n.has_tag_name(name)).collect()
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn format_decimal_is_canonical(mantissa in any::<i64>(), scale in 0u32..=10) {
        let d = Decimal::new(mantissa, scale);
        let text = format_decimal(d);

        prop_assert_eq!(&text, &format_decimal(d));
        prop_assert!(text.contains('.'));
        let fraction = text.rsplit('.').next().unwrap();
        prop_assert!(fraction == "0" || !fraction.ends_with('0'), "{}", text);
        prop_assert_eq!(text.parse::<Decimal>().unwrap(), d);
    }

    #[test]
    fn equal_values_render_identically(mantissa in -1_000_000i64..1_000_000, extra in 0u32..5) {
        let d = Decimal::new(mantissa, 2);
        let mut padded = d;
        padded.rescale(2 + extra);
        prop_assert_eq!(format_decimal(d), format_decimal(padded));
    }

    #[test]
    fn serialized_documents_validate(doc in arb_teif()) {
        let value = serde_json::to_value(&doc).unwrap();
        let decoded = validate(&value).unwrap();
        prop_assert_eq!(decoded, doc);
    }

    #[test]
    fn projection_preserves_shape(doc in arb_teif()) {
        let xml = xml::to_teif_xml(&doc).unwrap();
        let parsed = roxmltree::Document::parse(&xml).unwrap();

        let root = parsed.root_element();
        prop_assert_eq!(root.tag_name().name(), "TEIF");
        prop_assert_eq!(root.attribute("version"), Some(doc.version.as_str()));
        prop_assert_eq!(root.attribute("controlingAgency"), Some(doc.controling_agency.as_str()));

        let dtms = element_names(&parsed, "Dtm");
        prop_assert_eq!(dtms.len(), doc.dates.len());
        for (node, dtm) in dtms.iter().zip(&doc.dates) {
            prop_assert_eq!(node.attribute("functionCode"), Some(dtm.function_code.as_str()));
        }

        let lins = element_names(&parsed, "Lin");
        prop_assert_eq!(lins.len(), doc.line_items().count());
        for (node, item) in lins.iter().zip(doc.line_items()) {
            let kids: Vec<_> = node.children().filter(|n| n.is_element()).collect();
            prop_assert_eq!(kids.len(), 5);
            let quantity = format_decimal(item.quantity);
            let line_total = format_decimal(item.line_total);
            prop_assert_eq!(kids[2].text(), Some(quantity.as_str()));
            prop_assert_eq!(kids[4].text(), Some(line_total.as_str()));
        }

        prop_assert_eq!(element_names(&parsed, "LinSection").len(), doc.line_sections.len());
        prop_assert_eq!(element_names(&parsed, "AmountDetails").len(), doc.amounts.details.len());
        prop_assert!(element_names(&parsed, "PartnerSection").is_empty());
    }

    #[test]
    fn accepted_text_always_projects_to_xml(description in any::<String>(), street in any::<String>()) {
        let mut input = sample_fields();
        input["LinSection"][0]["Lin"][0]["Description"] = serde_json::json!(description);
        input["PartnerSection"]["PartnerDetails"][0]["Nad"]["PartnerAdresses"][0]["Street"] =
            serde_json::json!(street);

        match validate(&input) {
            Ok(doc) => {
                let options = xml::XmlOptions::new().include_partners(true);
                let xml = xml::to_teif_xml_with(&doc, &options).unwrap();
                prop_assert!(roxmltree::Document::parse(&xml).is_ok(), "{}", xml);
            }
            Err(err) => {
                prop_assert!(err
                    .errors()
                    .iter()
                    .all(|e| e.kind == ViolationKind::InvalidCharacter));
            }
        }
    }

    #[test]
    fn dropping_a_date_field_names_it(doc in arb_teif(), which in 0usize..3) {
        let mut value = serde_json::to_value(&doc).unwrap();
        let key = ["functionCode", "format", "DateText"][which];
        let last = doc.dates.len() - 1;
        value["Dtm"][last].as_object_mut().unwrap().remove(key);

        let err = validate(&value).unwrap_err();
        let path = format!("Dtm[{last}].{key}");
        prop_assert!(err.contains_field(&path));
        prop_assert_eq!(err.errors().len(), 1);
    }
}
