use serde_json::{Value, json};

/// Fixed sample field mapping, shaped like extractor output.
///
/// Two partners (seller `SU`, buyer `BY`), one line group with two items,
/// one payable amount in TND and 19% tax.
pub fn sample_fields() -> Value {
    json!({
        "version": "2.0",
        "controlingAgency": "TTN",
        "InvoiceHeader": {
            "MessageSenderIdentifier": {"type": "I-01", "value": "1234567AAM000"},
            "MessageReceiverIdentifier": {"type": "I-01", "value": "7654321PBN000"}
        },
        "Bgm": {
            "DocumentIdentifier": "INV-2025-001",
            "DocumentType": {"code": "380", "name": "Facture"}
        },
        "Dtm": [
            {"functionCode": "137", "format": "DDMMYY", "DateText": "190825"}
        ],
        "PartnerSection": {
            "PartnerDetails": [
                {
                    "functionCode": "SU",
                    "Nad": {
                        "PartnerIdentifier": {"type": "I-01", "value": "1234567AAM000"},
                        "PartnerNom": {"value": "Tech Solutions SARL"},
                        "PartnerAdresses": [
                            {
                                "Street": "Av. Habib Bourguiba",
                                "CityName": "Tunis",
                                "PostalCode": "1000",
                                "Country": "TN"
                            }
                        ]
                    }
                },
                {
                    "functionCode": "BY",
                    "Nad": {
                        "PartnerIdentifier": {"type": "I-01", "value": "7654321PBN000"},
                        "PartnerNom": {"value": "Alpha Distribution SA"},
                        "PartnerAdresses": [
                            {
                                "Street": "Rue de Marseille",
                                "CityName": "Sfax",
                                "PostalCode": "3000",
                                "Country": "TN"
                            }
                        ]
                    }
                }
            ]
        },
        "LinSection": [
            {"Lin": [
                {
                    "ItemIdentifier": "PRD-001",
                    "Description": "Laptop",
                    "Quantity": 2,
                    "UnitPrice": 1200.0,
                    "LineTotal": 2400.0
                },
                {
                    "ItemIdentifier": "PRD-002",
                    "Description": "Printer",
                    "Quantity": 1,
                    "UnitPrice": 600.0,
                    "LineTotal": 600.0
                }
            ]}
        ],
        "InvoiceMoa": {
            "AmountDetails": [
                {"currencyCodeList": "TND", "amountTypeCode": "I-189", "Amount": 3000.0}
            ]
        },
        "InvoiceTax": {
            "TaxTypeCode": "I-1601",
            "TaxRate": 19.0,
            "TaxAmount": 570.0
        }
    })
}
